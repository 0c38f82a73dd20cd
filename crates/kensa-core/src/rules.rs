use serde_json::Value;

/// Predicate deciding whether a field value is acceptable.
///
/// `None` means the field is absent, or the entry is not an object at all.
pub type Predicate = fn(Option<&Value>) -> bool;

/// A single field check
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub check: Predicate,
}

impl FieldRule {
    pub const fn new(field: &'static str, check: Predicate) -> Self {
        Self { field, check }
    }

    /// Look up this rule's field on `entry` and run the predicate on it
    pub fn accepts(&self, entry: &Value) -> bool {
        (self.check)(entry.get(self.field))
    }
}

/// Ordered, immutable table of field rules.
///
/// Iteration order is the table order, so reports listing several failing
/// fields of one entry always come out the same way.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    rules: &'static [FieldRule],
}

impl RuleSet {
    pub const fn new(rules: &'static [FieldRule]) -> Self {
        Self { rules }
    }

    pub fn iter(&self) -> std::slice::Iter<'static, FieldRule> {
        self.rules.iter()
    }

    /// Field names in evaluation order
    pub fn fields(&self) -> impl Iterator<Item = &'static str> {
        self.rules.iter().map(|rule| rule.field)
    }

    pub fn get(&self, field: &str) -> Option<&'static FieldRule> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    /// Run one field's predicate directly against a value.
    ///
    /// Returns `None` if the rule set has no rule for `field`.
    pub fn check(&self, field: &str, value: Option<&Value>) -> Option<bool> {
        self.get(field).map(|rule| (rule.check)(value))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Value is a string satisfying `pred`
pub fn string_where(value: Option<&Value>, pred: impl FnOnce(&str) -> bool) -> bool {
    matches!(value, Some(Value::String(s)) if pred(s))
}

/// Value is an array whose every element satisfies `pred`. An empty array passes.
pub fn array_where(value: Option<&Value>, pred: impl FnMut(&Value) -> bool) -> bool {
    matches!(value, Some(Value::Array(items)) if items.iter().all(pred))
}

/// Non-empty string made only of characters accepted by `allowed`
pub fn only_chars(s: &str, allowed: impl Fn(char) -> bool) -> bool {
    !s.is_empty() && s.chars().all(allowed)
}

/// Whitespace as a browser's `String.prototype.trim` sees it: Unicode
/// whitespace minus NEL (U+0085), plus the byte order mark.
pub fn is_trim_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Trimmed text is non-empty
pub fn has_content(s: &str) -> bool {
    !s.trim_matches(is_trim_whitespace).is_empty()
}
