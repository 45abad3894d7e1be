pub mod types;

pub use types::{CandidateGroup, LemmaRow, PartOfSpeech, SourceRecord, Translations};
