use std::path::Path;

use kensa_config::report::ReportFormat;
use kensa_core::{Report, ReportSummary};
use serde::Serialize;

#[derive(Serialize)]
struct FileReport<'a> {
    file: String,
    #[serde(flatten)]
    summary: &'a ReportSummary,
}

/// Render one report for printing.
///
/// Text output gets a `==> path <==` header when several files are checked.
/// JSON output is one object per line with the file path included.
pub fn render(
    report: &Report,
    path: &Path,
    format: ReportFormat,
    with_header: bool,
) -> anyhow::Result<String> {
    match format {
        ReportFormat::Text if with_header => {
            Ok(format!("==> {} <==\n{report}", path.display()))
        }
        ReportFormat::Text => Ok(report.to_string()),
        ReportFormat::Json => {
            let summary = report.summary();
            let line = serde_json::to_string(&FileReport {
                file: path.display().to_string(),
                summary: &summary,
            })?;
            Ok(line)
        }
    }
}
