use kensa_core::{ValidationError, validate_database, validate_entry};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rules::KANJI_RULES;
use crate::script::DELIMITER;

/// Example word and sentence; braces mark the target word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceExample {
    pub word: String,
    pub sentence: String,
}

/// A kanji database entry that has passed every field rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiEntry {
    pub kanji: String,
    pub meaning: String,
    pub onyomi: String,
    pub kunyomi: String,
    pub mnemonic: String,
    pub onyomi_sentences: Vec<SentenceExample>,
    pub kunyomi_sentences: Vec<SentenceExample>,
    pub lookalike_kanji: String,
}

impl KanjiEntry {
    pub fn onyomi_readings(&self) -> Vec<&str> {
        split_list(&self.onyomi)
    }

    pub fn kunyomi_readings(&self) -> Vec<&str> {
        split_list(&self.kunyomi)
    }

    pub fn lookalikes(&self) -> Vec<&str> {
        split_list(&self.lookalike_kanji)
    }
}

/// Split a `;`-delimited field, dropping blank items
fn split_list(s: &str) -> Vec<&str> {
    s.split(DELIMITER)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum PromoteError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<ValidationError>),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Validate one entry and convert it into a [`KanjiEntry`]
pub fn promote_entry(entry: &Value, position: usize) -> Result<KanjiEntry, PromoteError> {
    let errors = validate_entry(&KANJI_RULES, entry, position);
    if !errors.is_empty() {
        return Err(PromoteError::Invalid(errors));
    }
    Ok(KanjiEntry::deserialize(entry)?)
}

/// Validate a whole database and convert it, or return every error found
pub fn promote_database(entries: &[Value]) -> Result<Vec<KanjiEntry>, PromoteError> {
    let errors = validate_database(&KANJI_RULES, entries);
    if !errors.is_empty() {
        return Err(PromoteError::Invalid(errors));
    }

    let promoted = entries
        .iter()
        .map(KanjiEntry::deserialize)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!("promoted {} kanji entries", promoted.len());
    Ok(promoted)
}
