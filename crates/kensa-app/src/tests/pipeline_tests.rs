//! End-to-end checks: JSON text in, report text out

use std::path::Path;

use kensa_config::report::ReportFormat;
use kensa_core::{Report, check_text};
use kensa_lang_japanese::KANJI_RULES;

use crate::render::render;

const SUN: &str = r#"{"kanji":"日","meaning":"sun","onyomi":"にち","kunyomi":"ひ","mnemonic":"looks like sun","onyomi_sentences":[],"kunyomi_sentences":[],"lookalike_kanji":"白"}"#;

fn check(text: &str) -> String {
    check_text(&KANJI_RULES, text).to_string()
}

#[test]
fn test_empty_database() {
    assert_eq!(check("[]"), "No issues found. The database is valid.");
}

#[test]
fn test_top_level_not_array() {
    assert_eq!(check(r#""not an array""#), "Error: Database is not an array.");
    assert_eq!(check(SUN), "Error: Database is not an array.");
}

#[test]
fn test_valid_entry() {
    assert_eq!(
        check(&format!("[{SUN}]")),
        "No issues found. The database is valid."
    );
}

#[test]
fn test_bad_kanji_meaning_onyomi() {
    let text = r#"[{"kanji":"日日","meaning":"","onyomi":"abc"}]"#;
    assert_eq!(
        check(text),
        "Issues found:\n\
         Line 1: Invalid or missing value for 'kanji'.\n\
         Line 1: Invalid or missing value for 'meaning'.\n\
         Line 1: Invalid or missing value for 'onyomi'.\n\
         Line 1: Invalid or missing value for 'kunyomi'.\n\
         Line 1: Invalid or missing value for 'mnemonic'.\n\
         Line 1: Invalid or missing value for 'onyomi_sentences'.\n\
         Line 1: Invalid or missing value for 'kunyomi_sentences'.\n\
         Line 1: Invalid or missing value for 'lookalike_kanji'."
    );
}

#[test]
fn test_malformed_json() {
    let out = check(r#"{"a":}"#);
    let message = out
        .strip_prefix("Error: Failed to parse JSON. ")
        .expect("parse error prefix");
    assert!(!message.is_empty());
}

#[test]
fn test_deeply_nested_value_is_not_a_parse_error() {
    let nested = format!("{}1{}", "[".repeat(200), "]".repeat(200));
    let text = format!("[{{\"kanji\":{nested}}}]");
    let report = check_text(&KANJI_RULES, &text);

    assert!(matches!(report, Report::Issues(_)));
    assert_eq!(report.errors().len(), KANJI_RULES.len());
    assert!(
        report
            .to_string()
            .contains("Line 1: Invalid or missing value for 'kanji'.")
    );
}

#[test]
fn test_every_entry_is_checked() {
    let text = format!("[42, {SUN}, null, {SUN}, \"日\"]");
    let report = check_text(&KANJI_RULES, &text);
    let positions: Vec<usize> = report.errors().iter().map(|e| e.position).collect();

    let per_entry = KANJI_RULES.len();
    assert_eq!(positions.len(), per_entry * 3);
    assert!(positions[..per_entry].iter().all(|&p| p == 1));
    assert!(positions[per_entry..per_entry * 2].iter().all(|&p| p == 3));
    assert!(positions[per_entry * 2..].iter().all(|&p| p == 5));
}

#[test]
fn test_each_field_reported_once_per_entry() {
    let text = r#"[{"kanji":1,"meaning":1,"onyomi":1,"kunyomi":1,"mnemonic":1,"onyomi_sentences":1,"kunyomi_sentences":1,"lookalike_kanji":1}]"#;
    let report = check_text(&KANJI_RULES, text);
    let fields: Vec<&str> = report.errors().iter().map(|e| e.field).collect();
    let expected: Vec<&str> = KANJI_RULES.fields().collect();
    assert_eq!(fields, expected);
}

#[test]
fn test_report_is_deterministic() {
    let text = format!(r#"[{SUN}, {{"kanji":"ab"}}, []]"#);
    assert_eq!(check(&text), check(&text));
}

#[test]
fn test_render_text_with_header() {
    let report = Report::Valid;
    let out = render(&report, Path::new("kanji.json"), ReportFormat::Text, true).unwrap();
    assert_eq!(out, "==> kanji.json <==\nNo issues found. The database is valid.");

    let out = render(&report, Path::new("kanji.json"), ReportFormat::Text, false).unwrap();
    assert_eq!(out, "No issues found. The database is valid.");
}

#[test]
fn test_render_json_line() {
    let report = check_text(&KANJI_RULES, r#"[{"kanji":"日"}]"#);
    let out = render(&report, Path::new("db.json"), ReportFormat::Json, false).unwrap();
    assert!(!out.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["file"], "db.json");
    assert_eq!(value["status"], "issues");
    assert_eq!(value["errors"][0]["field"], "meaning");
    assert_eq!(value["errors"][0]["position"], 1);
    assert_eq!(value["errors"].as_array().map(Vec::len), Some(7));
}
