use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use glossdb_config::Config;

/// Config from a JSON file, missing fields take their defaults
fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open config {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

/// Explicit config file if given, otherwise the environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => load_config_file(path)?,
        None => Config::new(),
    };

    if config.workers == 0 {
        tracing::warn!("workers = 0, running one language at a time");
        config.workers = 1;
    }
    Ok(config)
}

/// Languages from the command line, falling back to the configured ones
pub fn select_languages(config: &Config, requested: Vec<String>) -> Vec<String> {
    let languages = if requested.is_empty() {
        config.lemma_langs.clone()
    } else {
        requested
    };

    let mut seen = Vec::with_capacity(languages.len());
    for lang in languages {
        if seen.contains(&lang) {
            tracing::warn!("Ignoring repeated language {lang}");
            continue;
        }
        seen.push(lang);
    }
    seen
}
