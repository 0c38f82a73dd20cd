use serde::{Deserialize, Serialize};

fn default_format() -> ReportFormat {
    ReportFormat::Text
}

fn default_fail_on_issues() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ReportConfig {
    #[serde(default = "default_format")]
    pub format: ReportFormat,
    /// Exit non-zero when a database has problems
    #[serde(default = "default_fail_on_issues")]
    pub fail_on_issues: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            fail_on_issues: default_fail_on_issues(),
        }
    }
}
