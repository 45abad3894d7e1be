use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_source_records() -> String {
    "kindle_all_lemmas.csv".to_string()
}

fn default_origin_lemmas() -> String {
    "kindle_enabled_lemmas.json".to_string()
}

/// Where the input tables live.
///
/// Per-language files are looked up as `{data_dir}/{lang}/{file}`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SourcesConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Source record CSV, stored under the origin language folder
    #[serde(default = "default_source_records")]
    pub source_records: String,
    /// Curated origin-language enable/difficulty list
    #[serde(default = "default_origin_lemmas")]
    pub origin_lemmas: String,
    /// Extra `lemma\tPOS\tTAG\tform` lexicon merged into the English morphology tables
    pub inflection_lexicon: Option<PathBuf>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            source_records: default_source_records(),
            origin_lemmas: default_origin_lemmas(),
            inflection_lexicon: None,
        }
    }
}

impl SourcesConfig {
    pub fn new() -> Self {
        let data_dir = env::var("GLOSSDB_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let inflection_lexicon = env::var("GLOSSDB_INFLECTION_LEXICON").ok().map(PathBuf::from);

        Self {
            data_dir,
            inflection_lexicon,
            ..Self::default()
        }
    }

    pub fn language_dir(&self, lang: &str) -> PathBuf {
        self.data_dir.join(lang)
    }

    pub fn source_records_path(&self, origin_lang: &str) -> PathBuf {
        self.language_dir(origin_lang).join(&self.source_records)
    }

    pub fn origin_lemmas_path(&self, origin_lang: &str) -> PathBuf {
        self.language_dir(origin_lang).join(&self.origin_lemmas)
    }

    pub fn translations_path(&self, lang: &str) -> PathBuf {
        self.language_dir(lang).join("translations.json")
    }

    pub fn difficulty_path(&self, lang: &str) -> PathBuf {
        self.language_dir(lang).join("difficulty.json")
    }

    pub fn frequency_path(&self, lang: &str) -> PathBuf {
        self.language_dir(lang).join("frequency.tsv")
    }
}
