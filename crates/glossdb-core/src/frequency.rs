use std::collections::HashMap;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::error::{ProviderError, TableError};
use crate::language::FrequencyProvider;

/// Zipf value reported for words missing from a loaded language
pub const UNKNOWN_ZIPF: f32 = 0.0;

/// Lookup form of a word: NFC, lowercased
fn fold(word: &str) -> String {
    word.nfc().collect::<String>().to_lowercase()
}

fn zipf_to_frequency(zipf: f32) -> f64 {
    10f64.powf(zipf as f64 - 9.0)
}

fn frequency_to_zipf(frequency: f64) -> f32 {
    // two decimals, like published zipf tables
    ((frequency.log10() + 9.0) * 100.0).round() as f32 / 100.0
}

/// Per-language word frequency tables
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    languages: HashMap<String, HashMap<String, f32>>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one language from a TSV file (word\tzipf format)
    pub fn load_language(&mut self, language: &str, path: &Path) -> Result<usize, TableError> {
        if !path.exists() {
            return Err(TableError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let mut frequencies = HashMap::new();

        for line in content.lines() {
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() >= 2 {
                if let Ok(zipf) = parts[1].trim().parse::<f32>() {
                    frequencies.insert(fold(parts[0]), zipf);
                }
            }
        }

        let count = frequencies.len();
        tracing::info!("Loaded {} {} word frequencies from {}", count, language, path.display());
        self.languages.insert(language.to_string(), frequencies);
        Ok(count)
    }

    pub fn insert_language(&mut self, language: &str, words: impl IntoIterator<Item = (String, f32)>) {
        self.languages.insert(
            language.to_string(),
            words.into_iter().map(|(word, zipf)| (fold(&word), zipf)).collect(),
        );
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }
}

impl FrequencyProvider for FrequencyTable {
    /// Case and normalization insensitive. A phrase scores the half-harmonic
    /// mean of its token frequencies, zero if any token is unknown.
    fn zipf_frequency(&self, word: &str, language: &str) -> Result<f32, ProviderError> {
        let words = self
            .languages
            .get(language)
            .ok_or_else(|| ProviderError::FrequencyUnavailable(language.to_string()))?;

        let folded = fold(word);
        if let Some(zipf) = words.get(folded.trim()) {
            return Ok(*zipf);
        }

        let mut inverse_sum = 0.0;
        let mut tokens = 0;
        for token in folded.split_whitespace() {
            match words.get(token) {
                Some(zipf) => inverse_sum += 1.0 / zipf_to_frequency(*zipf),
                None => return Ok(UNKNOWN_ZIPF),
            }
            tokens += 1;
        }
        if tokens == 0 {
            return Ok(UNKNOWN_ZIPF);
        }
        Ok(frequency_to_zipf(1.0 / inverse_sum).max(UNKNOWN_ZIPF))
    }
}
