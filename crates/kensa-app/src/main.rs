use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use kensa_config::Config;
use kensa_config::report::ReportFormat;
use kensa_core::{Report, check_text};
use kensa_lang_japanese::KANJI_RULES;
use tracing_subscriber::EnvFilter;

pub mod io;
pub mod render;

#[cfg(test)]
mod tests;

/// Check kanji database files for invalid or missing fields
#[derive(Parser, Debug)]
#[command(name = "kensa", version)]
struct Cli {
    /// Database files to check; `-` reads stdin
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format: text or json
    #[arg(long, value_parser = parse_format)]
    format: Option<ReportFormat>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Exit 0 even when problems are found
    #[arg(long)]
    no_fail: bool,
}

fn parse_format(s: &str) -> Result<ReportFormat, String> {
    ReportFormat::parse(s).ok_or_else(|| format!("unknown format '{s}', expected text or json"))
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("kensa: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::new(),
    };
    if let Some(format) = cli.format {
        config.report.format = format;
    }
    if cli.no_fail {
        config.report.fail_on_issues = false;
    }

    init_tracing(&config);

    let with_header = cli.files.len() > 1;
    let mut reports = Vec::new();
    let mut read_failures = 0;

    for (path, result) in cli.files.iter().zip(check_files(&cli.files)) {
        match result {
            Ok(report) => {
                println!(
                    "{}",
                    render::render(&report, path, config.report.format, with_header)?
                );
                reports.push(report);
            }
            Err(e) => {
                tracing::error!(file = %path.display(), "{e:#}");
                eprintln!("kensa: {e:#}");
                read_failures += 1;
            }
        }
    }

    Ok(ExitCode::from(exit_status(
        &reports,
        read_failures,
        config.report.fail_on_issues,
    )))
}

/// Check each file independently; a file that cannot be read does not stop
/// the ones after it.
pub fn check_files(paths: &[PathBuf]) -> Vec<anyhow::Result<Report>> {
    paths.iter().map(|path| check_file(path)).collect()
}

/// 2 if any file could not be read, 1 if any report is not valid and
/// `fail_on_issues` is set, otherwise 0
pub fn exit_status(reports: &[Report], read_failures: usize, fail_on_issues: bool) -> u8 {
    if read_failures > 0 {
        2
    } else if fail_on_issues && !reports.iter().all(Report::is_valid) {
        1
    } else {
        0
    }
}

/// Read one database file and validate it against the kanji rules
pub fn check_file(path: &Path) -> anyhow::Result<Report> {
    let text = io::read_source(path)?;
    let report = check_text(&KANJI_RULES, &text);
    tracing::info!(file = %path.display(), status = report.status(), "checked database");
    Ok(report)
}

/// Logs go to stderr so stdout only carries reports
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_env("KENSA_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}
