pub mod entry;
pub mod rules;
pub mod script;

pub use entry::{KanjiEntry, PromoteError, SentenceExample, promote_database, promote_entry};
pub use rules::KANJI_RULES;
pub use script::Script;
