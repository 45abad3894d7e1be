use std::env;

use serde::{Deserialize, Serialize};

use self::output::OutputConfig;
use self::sources::SourcesConfig;

pub mod output;
pub mod sources;

fn default_origin_lang() -> String {
    "en".to_string()
}

fn default_gloss_lang() -> String {
    "en".to_string()
}

fn default_lemma_langs() -> Vec<String> {
    ["en", "es", "fr", "de", "it", "pt", "ru", "zh"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_workers() -> usize {
    4
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub sources: SourcesConfig,
    pub output: OutputConfig,

    /// Language of the source lexicon, its table is built without translation
    #[serde(default = "default_origin_lang")]
    pub origin_lang: String,
    /// Language definitions are written in
    #[serde(default = "default_gloss_lang")]
    pub gloss_lang: String,
    /// Languages built when none are given on the command line
    #[serde(default = "default_lemma_langs")]
    pub lemma_langs: Vec<String>,
    /// Max language passes running at once
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: SourcesConfig::default(),
            output: OutputConfig::default(),
            origin_lang: default_origin_lang(),
            gloss_lang: default_gloss_lang(),
            lemma_langs: default_lemma_langs(),
            workers: default_workers(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let workers = env::var("GLOSSDB_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|w: &usize| *w > 0)
            .unwrap_or_else(default_workers);

        let lemma_langs = env::var("GLOSSDB_LEMMA_LANGS")
            .ok()
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|langs| !langs.is_empty())
            .unwrap_or_else(default_lemma_langs);

        Config {
            sources: SourcesConfig::new(),
            output: OutputConfig::new(),
            origin_lang: default_origin_lang(),
            gloss_lang: default_gloss_lang(),
            lemma_langs,
            workers,
        }
    }

    pub fn is_origin(&self, lang: &str) -> bool {
        self.origin_lang == lang
    }
}
