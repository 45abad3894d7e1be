use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_version() -> String {
    "0.5.1dev".to_string()
}

fn default_segmented_langs() -> Vec<String> {
    vec!["zh".to_string()]
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Release version, only the major part ends up in file names
    #[serde(default = "default_version")]
    pub version: String,
    /// Languages written without whitespace word boundaries, their index also covers `forms`
    #[serde(default = "default_segmented_langs")]
    pub segmented_langs: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            version: default_version(),
            segmented_langs: default_segmented_langs(),
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        let output_dir = env::var("GLOSSDB_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_output_dir());

        let version = env::var("GLOSSDB_VERSION").unwrap_or_else(|_| default_version());

        Self {
            output_dir,
            version,
            ..Self::default()
        }
    }

    pub fn major_version(&self) -> &str {
        self.version.split('.').next().unwrap_or(&self.version)
    }

    pub fn is_segmented(&self, lang: &str) -> bool {
        self.segmented_langs.iter().any(|l| l == lang)
    }

    /// `{output_dir}/{lang}/kindle_{lang}_{gloss}_v{major}.db`
    pub fn database_path(&self, lemma_lang: &str, gloss_lang: &str) -> PathBuf {
        self.output_dir.join(lemma_lang).join(format!(
            "kindle_{lemma_lang}_{gloss_lang}_v{}.db",
            self.major_version()
        ))
    }
}
