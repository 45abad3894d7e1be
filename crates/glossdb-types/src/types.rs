use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech label used by the source lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    /// Every label without a dedicated variant
    Other,
}

impl PartOfSpeech {
    /// Parse a source label, unknown labels become `Other`
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "noun" => PartOfSpeech::Noun,
            "verb" => PartOfSpeech::Verb,
            "adjective" => PartOfSpeech::Adjective,
            "adverb" => PartOfSpeech::Adverb,
            "pronoun" => PartOfSpeech::Pronoun,
            _ => PartOfSpeech::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Other => "other",
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, PartOfSpeech::Other)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PartOfSpeech {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<PartOfSpeech> for String {
    fn from(pos: PartOfSpeech) -> Self {
        pos.as_str().to_string()
    }
}

/// One dictionary sense read from the source lexicon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub sense_id: i64,
    pub display_group_id: i64,
}

impl SourceRecord {
    pub fn new(lemma: impl Into<String>, pos: PartOfSpeech, sense_id: i64, display_group_id: i64) -> Self {
        Self {
            lemma: lemma.into(),
            pos,
            sense_id,
            display_group_id,
        }
    }

    /// Sort key of a resolution pass
    pub fn pass_order(&self) -> (&str, PartOfSpeech, i64) {
        (&self.lemma, self.pos, self.sense_id)
    }
}

/// `[canonical_form, variant_form...]`
pub type CandidateGroup = Vec<String>;

/// Known translations of one target language, keyed by `"{lemma}_{pos}"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    entries: HashMap<String, Vec<CandidateGroup>>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup_key(lemma: &str, pos: PartOfSpeech) -> String {
        format!("{lemma}_{pos}")
    }

    pub fn insert(&mut self, lemma: &str, pos: PartOfSpeech, groups: Vec<CandidateGroup>) {
        self.entries.insert(Self::lookup_key(lemma, pos), groups);
    }

    pub fn get(&self, lemma: &str, pos: PartOfSpeech) -> Option<&[CandidateGroup]> {
        self.entries
            .get(&Self::lookup_key(lemma, pos))
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Vec<CandidateGroup>)> for Translations {
    fn from_iter<I: IntoIterator<Item = (String, Vec<CandidateGroup>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// One persisted row of the lemma table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaRow {
    pub sense_id: i64,
    pub enabled: bool,
    pub lemma: String,
    pub pos: PartOfSpeech,
    /// 1 (easy) ..= 5
    pub difficulty: u8,
    pub forms: Vec<String>,
    #[serde(default)]
    pub short_def: String,
    #[serde(default)]
    pub full_def: String,
    #[serde(default)]
    pub example: String,
}

impl LemmaRow {
    pub fn new(sense_id: i64, enabled: bool, lemma: impl Into<String>, pos: PartOfSpeech, difficulty: u8) -> Self {
        Self {
            sense_id,
            enabled,
            lemma: lemma.into(),
            pos,
            difficulty,
            forms: Vec::new(),
            short_def: String::new(),
            full_def: String::new(),
            example: String::new(),
        }
    }

    pub fn with_forms(mut self, forms: impl IntoIterator<Item = String>) -> Self {
        self.forms = forms.into_iter().collect();
        self
    }

    /// Comma joined form list as stored in the `forms` column
    pub fn forms_column(&self) -> String {
        self.forms.join(",")
    }

    pub fn split_forms_column(column: &str) -> Vec<String> {
        column
            .split(',')
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect()
    }
}
