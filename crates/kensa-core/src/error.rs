/// Failures that stop a run before any entry is checked
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Failed to parse JSON. {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Database is not an array.")]
    NotAnArray,
}
