pub mod difficulty;
pub mod error;
pub mod frequency;
pub mod headword;
pub mod language;
pub mod resolver;

#[cfg(test)]
mod test_utils;

pub use difficulty::{frequency_bucket, zipf_to_difficulty, DifficultyTable, OriginLemmas};
pub use error::{ProviderError, TableError};
pub use frequency::FrequencyTable;
pub use headword::{normalize_variants, FormExpander, HeadwordShape};
pub use language::{FrequencyProvider, Inflections, MorphPos, MorphTag, MorphologyProvider};
pub use resolver::{DifficultySource, InsertedKeySet, TranslationResolver};
