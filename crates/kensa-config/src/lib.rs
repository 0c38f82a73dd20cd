use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::report::{ReportConfig, ReportFormat};

pub mod report;

fn default_log_filter() -> String {
    "warn".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,

    /// `tracing` filter directive, used when neither KENSA_LOG nor RUST_LOG is set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report: ReportConfig::default(),
            log_filter: default_log_filter(),
            log_json: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    /// Load a JSON config file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Config::from_file(path)?;
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// Read a JSON config file as written, without environment overrides
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Apply KENSA_* overrides; unparsable values are ignored
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(format) = lookup("KENSA_FORMAT").and_then(|v| ReportFormat::parse(&v)) {
            self.report.format = format;
        }

        if let Some(fail) = lookup("KENSA_FAIL_ON_ISSUES").and_then(|v| parse_bool(&v)) {
            self.report.fail_on_issues = fail;
        }

        if let Some(json) = lookup("KENSA_LOG_JSON").and_then(|v| parse_bool(&v)) {
            self.log_json = json;
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
