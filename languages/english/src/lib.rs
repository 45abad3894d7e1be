pub mod inflector;
pub mod lexicon;
pub mod rules;

pub use inflector::EnglishInflector;
pub use lexicon::Lexicon;
