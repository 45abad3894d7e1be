use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::{ProviderError, TableError};
use crate::language::FrequencyProvider;

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// Zipf frequency to difficulty, inclusive lower bounds 7/5/3/1
pub fn zipf_to_difficulty(zipf: f32) -> u8 {
    if zipf >= 7.0 {
        5
    } else if zipf >= 5.0 {
        4
    } else if zipf >= 3.0 {
        3
    } else if zipf >= 1.0 {
        2
    } else {
        1
    }
}

/// Curated levels outside 1..=5 are pulled to the nearest bound
fn clamp_level(lemma: &str, level: u8) -> u8 {
    let clamped = level.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
    if clamped != level {
        tracing::warn!("Difficulty {} for {} out of range, using {}", level, lemma, clamped);
    }
    clamped
}

/// Difficulty of `word` derived from its usage frequency in `language`
pub fn frequency_bucket(
    word: &str,
    language: &str,
    frequency: &dyn FrequencyProvider,
) -> Result<u8, ProviderError> {
    let zipf = frequency.zipf_frequency(word, language)?;
    Ok(zipf_to_difficulty(zipf))
}

/// Curated difficulty per lemma of one language.
///
/// When present for a language it replaces frequency scoring, and lemmas
/// missing from it are published disabled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "HashMap<String, u8>")]
pub struct DifficultyTable {
    levels: HashMap<String, u8>,
}

impl DifficultyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `{"lemma": difficulty, ...}`
    pub fn load_from_file(path: &Path) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path)?;
        let table: Self = serde_json::from_str(&content)?;
        tracing::info!("Loaded {} curated difficulties from {}", table.len(), path.display());
        Ok(table)
    }

    /// A missing file means the language has no curated table
    pub fn load_optional(path: &Path) -> Result<Option<Self>, TableError> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from_file(path).map(Some)
    }

    pub fn insert(&mut self, lemma: impl Into<String>, difficulty: u8) {
        let lemma = lemma.into();
        let level = clamp_level(&lemma, difficulty);
        self.levels.insert(lemma, level);
    }

    pub fn get(&self, lemma: &str) -> Option<u8> {
        self.levels.get(lemma).copied()
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.levels.contains_key(lemma)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl From<HashMap<String, u8>> for DifficultyTable {
    fn from(levels: HashMap<String, u8>) -> Self {
        levels.into_iter().collect()
    }
}

impl FromIterator<(String, u8)> for DifficultyTable {
    fn from_iter<I: IntoIterator<Item = (String, u8)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (lemma, level) in iter {
            table.insert(lemma, level);
        }
        table
    }
}

/// Curated origin-language list: lemma -> (difficulty, representative sense id)
#[derive(Debug, Clone, Default)]
pub struct OriginLemmas {
    lemmas: HashMap<String, (u8, i64)>,
    enabled_sense_ids: HashSet<i64>,
}

impl OriginLemmas {
    pub fn from_map(lemmas: HashMap<String, (u8, i64)>) -> Self {
        let lemmas: HashMap<String, (u8, i64)> = lemmas
            .into_iter()
            .map(|(lemma, (level, sense_id))| {
                let level = clamp_level(&lemma, level);
                (lemma, (level, sense_id))
            })
            .collect();
        let enabled_sense_ids = lemmas.values().map(|(_, sense_id)| *sense_id).collect();
        Self {
            lemmas,
            enabled_sense_ids,
        }
    }

    /// Load `{"lemma": [difficulty, sense_id], ...}`
    pub fn load_from_file(path: &Path) -> Result<Self, TableError> {
        if !path.exists() {
            return Err(TableError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let lemmas: HashMap<String, (u8, i64)> = serde_json::from_str(&content)?;
        tracing::info!("Loaded {} curated lemmas from {}", lemmas.len(), path.display());
        Ok(Self::from_map(lemmas))
    }

    pub fn is_enabled(&self, sense_id: i64) -> bool {
        self.enabled_sense_ids.contains(&sense_id)
    }

    /// Curated difficulty, 1 for lemmas outside the list
    pub fn difficulty(&self, lemma: &str) -> u8 {
        self.lemmas.get(lemma).map(|(d, _)| *d).unwrap_or(MIN_DIFFICULTY)
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::test_utils::StubFrequency;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(zipf_to_difficulty(7.0), 5);
        assert_eq!(zipf_to_difficulty(5.0), 4);
        assert_eq!(zipf_to_difficulty(3.0), 3);
        assert_eq!(zipf_to_difficulty(1.0), 2);
        assert_eq!(zipf_to_difficulty(0.99), 1);
        assert_eq!(zipf_to_difficulty(0.0), 1);
        assert_eq!(zipf_to_difficulty(-3.0), 1);
        assert_eq!(zipf_to_difficulty(8.5), 5);
    }

    #[test]
    fn test_bucket_is_non_decreasing() {
        let mut last = MIN_DIFFICULTY;
        for step in 0..=90 {
            let difficulty = zipf_to_difficulty(step as f32 / 10.0);
            assert!(difficulty >= last);
            assert!((MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty));
            last = difficulty;
        }
    }

    #[test]
    fn test_frequency_bucket_uses_provider() {
        let frequency = StubFrequency::new("fr", &[("courir", 4.6), ("être", 7.4)]);

        assert_eq!(frequency_bucket("courir", "fr", &frequency).unwrap(), 3);
        assert_eq!(frequency_bucket("être", "fr", &frequency).unwrap(), 5);
        assert_eq!(frequency_bucket("inconnu", "fr", &frequency).unwrap(), 1);
        assert!(frequency_bucket("courir", "de", &frequency).is_err());
    }

    #[test]
    fn test_difficulty_table_optional() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("difficulty.json");

        assert!(DifficultyTable::load_optional(&path).unwrap().is_none());

        std::fs::write(&path, r#"{"courir": 2, "cours": 4}"#).unwrap();
        let table = DifficultyTable::load_optional(&path).unwrap().unwrap();
        assert_eq!(table.get("courir"), Some(2));
        assert!(!table.contains("marcher"));
    }

    #[test]
    fn test_curated_levels_clamped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("difficulty.json");
        std::fs::write(&path, r#"{"courir": 0, "diriger": 9, "marcher": 3}"#).unwrap();

        let table = DifficultyTable::load_from_file(&path).unwrap();
        assert_eq!(table.get("courir"), Some(MIN_DIFFICULTY));
        assert_eq!(table.get("diriger"), Some(MAX_DIFFICULTY));
        assert_eq!(table.get("marcher"), Some(3));

        let origin = OriginLemmas::from_map(HashMap::from([("run".to_string(), (7, 10))]));
        assert_eq!(origin.difficulty("run"), MAX_DIFFICULTY);
    }

    #[test]
    fn test_origin_lemmas() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"run": [2, 10], "walk": [1, 20]}}"#).unwrap();

        let origin = OriginLemmas::load_from_file(file.path()).unwrap();
        assert!(origin.is_enabled(10));
        assert!(!origin.is_enabled(11));
        assert_eq!(origin.difficulty("run"), 2);
        assert_eq!(origin.difficulty("swim"), 1);
    }
}
