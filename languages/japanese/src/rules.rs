use kensa_core::rules::{FieldRule, RuleSet, array_where, has_content, only_chars, string_where};
use serde_json::Value;

use crate::script::{is_lookalike_char, is_reading_char, is_sentence_char};

/// Field rules for a kanji database entry, in reporting order
pub static KANJI_RULES: RuleSet = RuleSet::new(&[
    FieldRule::new("kanji", single_character),
    FieldRule::new("meaning", non_blank),
    FieldRule::new("onyomi", reading),
    FieldRule::new("kunyomi", reading),
    FieldRule::new("mnemonic", non_blank),
    FieldRule::new("onyomi_sentences", sentence_examples),
    FieldRule::new("kunyomi_sentences", sentence_examples),
    FieldRule::new("lookalike_kanji", lookalikes),
]);

// Counts Unicode scalar values, not UTF-16 units, so supplementary-plane
// kanji such as 𠮟 are a single character.
fn single_character(value: Option<&Value>) -> bool {
    string_where(value, |s| s.chars().count() == 1)
}

fn non_blank(value: Option<&Value>) -> bool {
    string_where(value, has_content)
}

fn reading(value: Option<&Value>) -> bool {
    string_where(value, |s| only_chars(s, is_reading_char))
}

fn lookalikes(value: Option<&Value>) -> bool {
    string_where(value, |s| only_chars(s, is_lookalike_char))
}

fn sentence_text(value: Option<&Value>) -> bool {
    string_where(value, |s| only_chars(s, is_sentence_char))
}

// Non-object elements fail rather than being skipped.
fn sentence_examples(value: Option<&Value>) -> bool {
    array_where(value, |example| {
        example.is_object()
            && sentence_text(example.get("word"))
            && sentence_text(example.get("sentence"))
    })
}
