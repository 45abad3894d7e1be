use std::collections::HashSet;

use glossdb_types::{CandidateGroup, LemmaRow, PartOfSpeech, SourceRecord, Translations};

use crate::difficulty::{frequency_bucket, DifficultyTable, MIN_DIFFICULTY};
use crate::error::ProviderError;
use crate::headword::normalize_variants;
use crate::language::FrequencyProvider;

/// Translated lemmas already published in a display group during one pass.
///
/// Keys are `"{lemma}_{pos}_{display_group_id}"`. Owned by a single language pass.
#[derive(Debug, Clone, Default)]
pub struct InsertedKeySet {
    keys: HashSet<String>,
}

impl InsertedKeySet {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(lemma: &str, pos: PartOfSpeech, display_group_id: i64) -> String {
        format!("{lemma}_{pos}_{display_group_id}")
    }

    pub fn contains(&self, lemma: &str, pos: PartOfSpeech, display_group_id: i64) -> bool {
        self.keys.contains(&Self::key(lemma, pos, display_group_id))
    }

    /// Returns `false` when the key was already taken
    pub fn insert(&mut self, lemma: &str, pos: PartOfSpeech, display_group_id: i64) -> bool {
        self.keys.insert(Self::key(lemma, pos, display_group_id))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// How a resolved lemma gets its difficulty
#[derive(Clone, Copy)]
pub enum DifficultySource<'a> {
    /// Curated table, also gates the enabled flag
    Curated(&'a DifficultyTable),
    Frequency(&'a dyn FrequencyProvider),
}

/// Picks the canonical translated lemma for each sense of one target language
pub struct TranslationResolver<'a> {
    language: &'a str,
    translations: &'a Translations,
    difficulty: DifficultySource<'a>,
    inserted_keys: InsertedKeySet,
}

impl<'a> TranslationResolver<'a> {
    pub fn new(language: &'a str, translations: &'a Translations, difficulty: DifficultySource<'a>) -> Self {
        Self {
            language,
            translations,
            difficulty,
            inserted_keys: InsertedKeySet::new(),
        }
    }

    pub fn inserted_keys(&self) -> &InsertedKeySet {
        &self.inserted_keys
    }

    /// Resolve one sense into its row, registering the chosen lemma for its display group.
    ///
    /// Senses without a translation come back disabled with the untranslated headword.
    pub fn resolve(&mut self, sense: &SourceRecord) -> Result<LemmaRow, ProviderError> {
        let candidates = match self.find_groups(sense).map(candidate_forms) {
            Some(candidates) if !candidates.is_empty() => candidates,
            Some(_) => {
                tracing::warn!(
                    "Empty translation entry for {}_{} ({})",
                    sense.lemma,
                    sense.pos,
                    self.language
                );
                return Ok(untranslated_row(sense));
            }
            None => {
                tracing::debug!("No {} translation for {}_{}", self.language, sense.lemma, sense.pos);
                return Ok(untranslated_row(sense));
            }
        };

        let (default_lemma, default_forms) = candidates[0];
        let (lemma, forms) = candidates
            .iter()
            .copied()
            .find(|(lemma, _)| {
                !self
                    .inserted_keys
                    .contains(lemma, sense.pos, sense.display_group_id)
            })
            .unwrap_or((default_lemma, default_forms));

        let (difficulty, curated_miss) = match self.difficulty {
            DifficultySource::Curated(table) => (
                table.get(lemma).unwrap_or(MIN_DIFFICULTY),
                !table.contains(lemma),
            ),
            DifficultySource::Frequency(frequency) => {
                (frequency_bucket(lemma, self.language, frequency)?, false)
            }
        };

        let newly_claimed = self
            .inserted_keys
            .insert(lemma, sense.pos, sense.display_group_id);
        let enabled = newly_claimed && !curated_miss;

        Ok(LemmaRow::new(sense.sense_id, enabled, lemma, sense.pos, difficulty)
            .with_forms(forms.iter().cloned()))
    }

    /// Translation lookup with fallbacks: exact key, normalized headword variants, then `_other`
    fn find_groups(&self, sense: &SourceRecord) -> Option<&'a [CandidateGroup]> {
        if let Some(groups) = self.translations.get(&sense.lemma, sense.pos) {
            return Some(groups);
        }

        if sense.lemma.contains('(') || sense.lemma.contains('/') {
            for variant in normalize_variants(&sense.lemma) {
                for check_pos in [sense.pos, PartOfSpeech::Other] {
                    if let Some(groups) = self.translations.get(&variant, check_pos) {
                        return Some(groups);
                    }
                }
            }
        }

        if !sense.pos.is_other() {
            return self.translations.get(&sense.lemma, PartOfSpeech::Other);
        }

        None
    }
}

/// `canonical -> variants` in group order. A repeated canonical form keeps
/// its first position and takes the later variants.
fn candidate_forms(groups: &[CandidateGroup]) -> Vec<(&str, &[String])> {
    let mut candidates: Vec<(&str, &[String])> = Vec::with_capacity(groups.len());
    for group in groups {
        let Some((canonical, variants)) = group.split_first() else {
            continue;
        };
        match candidates.iter_mut().find(|(c, _)| *c == canonical) {
            Some(existing) => existing.1 = variants,
            None => candidates.push((canonical, variants)),
        }
    }
    candidates
}

fn untranslated_row(sense: &SourceRecord) -> LemmaRow {
    LemmaRow::new(sense.sense_id, false, sense.lemma.clone(), sense.pos, MIN_DIFFICULTY)
}
