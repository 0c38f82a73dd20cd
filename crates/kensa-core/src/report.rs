use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::CheckError;
use crate::rules::RuleSet;
use crate::types::{ErrorRecord, ValidationError};
use crate::validate::{parse_database, validate_database};

/// Outcome of one validation run, rendered as a single block of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Valid,
    Issues(Vec<ValidationError>),
    NotAnArray,
    ParseFailed(String),
}

impl Report {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        if errors.is_empty() {
            Report::Valid
        } else {
            Report::Issues(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Report::Valid)
    }

    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Report::Issues(errors) => errors,
            _ => &[],
        }
    }

    /// Machine-readable status tag
    pub fn status(&self) -> &'static str {
        match self {
            Report::Valid => "valid",
            Report::Issues(_) => "issues",
            Report::NotAnArray => "not_an_array",
            Report::ParseFailed(_) => "parse_error",
        }
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            status: self.status(),
            message: self.to_string(),
            errors: self.errors().iter().map(ErrorRecord::from).collect(),
        }
    }
}

/// Serializable form of a [`Report`]
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub status: &'static str,
    pub message: String,
    pub errors: Vec<ErrorRecord>,
}

impl From<CheckError> for Report {
    fn from(err: CheckError) -> Self {
        match err {
            CheckError::Parse(e) => Report::ParseFailed(e.to_string()),
            CheckError::NotAnArray => Report::NotAnArray,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Valid => f.write_str("No issues found. The database is valid."),
            Report::Issues(errors) => {
                f.write_str("Issues found:")?;
                for err in errors {
                    write!(f, "\n{err}")?;
                }
                Ok(())
            }
            Report::NotAnArray => f.write_str("Error: Database is not an array."),
            Report::ParseFailed(message) => {
                write!(f, "Error: Failed to parse JSON. {message}")
            }
        }
    }
}

/// Validate an already-parsed document
pub fn check_value(rules: &RuleSet, document: &Value) -> Report {
    match document {
        Value::Array(entries) => Report::from_errors(validate_database(rules, entries)),
        _ => {
            tracing::warn!("top-level JSON value is not an array");
            Report::NotAnArray
        }
    }
}

/// Parse JSON text and validate it
pub fn check_text(rules: &RuleSet, text: &str) -> Report {
    match parse_database(text) {
        Ok(entries) => Report::from_errors(validate_database(rules, &entries)),
        Err(e) => {
            tracing::warn!("database rejected before validation: {e}");
            Report::from(e)
        }
    }
}
