pub mod error;
pub mod report;
pub mod rules;
pub mod types;
pub mod validate;

pub use error::CheckError;
pub use report::{Report, ReportSummary, check_text, check_value};
pub use rules::{FieldRule, Predicate, RuleSet};
pub use types::{ErrorRecord, ValidationError};
pub use validate::{parse_database, validate_database, validate_entry};
