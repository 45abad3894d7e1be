pub mod builder;
pub mod error;
pub mod extract;
pub mod sources;
pub mod store;

pub use builder::{write_store, BuildSummary, LanguagePlan, LemmaStoreBuilder};
pub use error::{BuildError, LoadError, StoreError};
pub use extract::extract_source_records;
pub use sources::{load_translations, parse_source_records, read_source_records};
pub use store::LemmaStore;
