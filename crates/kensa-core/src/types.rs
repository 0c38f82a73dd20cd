use std::fmt;

use serde::Serialize;

/// One failing field of one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// 1-based position of the entry in the database
    pub position: usize,
    pub field: &'static str,
}

impl ValidationError {
    pub fn new(position: usize, field: &'static str) -> Self {
        Self { position, field }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}: Invalid or missing value for '{}'.",
            self.position, self.field
        )
    }
}

/// JSON shape of a validation error, with the rendered message alongside
#[derive(Debug, Clone, Serialize)]
pub struct ErrorRecord {
    pub position: usize,
    pub field: &'static str,
    pub message: String,
}

impl From<&ValidationError> for ErrorRecord {
    fn from(err: &ValidationError) -> Self {
        Self {
            position: err.position,
            field: err.field,
            message: err.message(),
        }
    }
}
