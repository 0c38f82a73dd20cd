use std::ops::RangeInclusive;

/// Hiragana block
pub const HIRAGANA: RangeInclusive<char> = '\u{3040}'..='\u{309F}';

/// CJK Unified Ideographs block
pub const CJK_IDEOGRAPHS: RangeInclusive<char> = '\u{4E00}'..='\u{9FFF}';

/// Separator between multiple readings or lookalikes
pub const DELIMITER: char = ';';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Hiragana,
    Kanji,
    Other,
}

impl Script {
    pub fn of(c: char) -> Self {
        if HIRAGANA.contains(&c) {
            Script::Hiragana
        } else if CJK_IDEOGRAPHS.contains(&c) {
            Script::Kanji
        } else {
            Script::Other
        }
    }
}

pub fn is_hiragana(c: char) -> bool {
    Script::of(c) == Script::Hiragana
}

pub fn is_cjk_ideograph(c: char) -> bool {
    Script::of(c) == Script::Kanji
}

/// ASCII letters, digits and underscore
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_separator(c: char) -> bool {
    c == ' ' || c == DELIMITER
}

/// Allowed in `onyomi` / `kunyomi`
pub fn is_reading_char(c: char) -> bool {
    is_hiragana(c) || is_separator(c)
}

/// Allowed in `lookalike_kanji`
pub fn is_lookalike_char(c: char) -> bool {
    is_cjk_ideograph(c) || is_separator(c)
}

/// Allowed in example words and sentences; braces mark the target word
pub fn is_sentence_char(c: char) -> bool {
    c == '{' || c == '}' || is_hiragana(c) || is_separator(c) || is_word_char(c)
}
