use serde::Deserialize;
use serde_json::Value;

use crate::error::CheckError;
use crate::rules::RuleSet;
use crate::types::ValidationError;

/// Check every rule against one entry.
///
/// Errors come back in rule order. Never fails on malformed entries: a
/// non-object entry simply fails every rule.
pub fn validate_entry(rules: &RuleSet, entry: &Value, position: usize) -> Vec<ValidationError> {
    rules
        .iter()
        .filter(|rule| !rule.accepts(entry))
        .map(|rule| ValidationError::new(position, rule.field))
        .collect()
}

/// Check every entry, in order, with 1-based positions
pub fn validate_database(rules: &RuleSet, entries: &[Value]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut failing = 0usize;

    for (index, entry) in entries.iter().enumerate() {
        let position = index + 1;
        let entry_errors = validate_entry(rules, entry, position);

        if !entry_errors.is_empty() {
            failing += 1;
            let fields: Vec<&str> = entry_errors.iter().map(|e| e.field).collect();
            tracing::debug!(position, ?fields, "entry failed validation");
        }

        errors.extend(entry_errors);
    }

    tracing::info!(
        entries = entries.len(),
        failing,
        errors = errors.len(),
        "validated database"
    );

    errors
}

/// Parse JSON text and require a top-level array.
///
/// Nesting depth is unbounded; deep values grow the stack on the heap instead
/// of failing the parse.
pub fn parse_database(text: &str) -> Result<Vec<Value>, CheckError> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;

    match value {
        Value::Array(entries) => Ok(entries),
        _ => Err(CheckError::NotAnArray),
    }
}
