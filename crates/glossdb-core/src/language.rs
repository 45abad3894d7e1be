use std::collections::BTreeMap;

use glossdb_types::PartOfSpeech;

use crate::error::ProviderError;

/// Part-of-speech tag set understood by morphology providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MorphPos {
    Noun,
    Verb,
    Adj,
    Adv,
    Propn,
}

impl MorphPos {
    /// Source label to provider tag, `None` means no inflection is attempted
    pub fn from_source(pos: PartOfSpeech) -> Option<Self> {
        match pos {
            PartOfSpeech::Noun => Some(MorphPos::Noun),
            PartOfSpeech::Verb => Some(MorphPos::Verb),
            PartOfSpeech::Adjective => Some(MorphPos::Adj),
            PartOfSpeech::Adverb => Some(MorphPos::Adv),
            PartOfSpeech::Pronoun => Some(MorphPos::Propn),
            PartOfSpeech::Other => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MorphPos::Noun => "NOUN",
            MorphPos::Verb => "VERB",
            MorphPos::Adj => "ADJ",
            MorphPos::Adv => "ADV",
            MorphPos::Propn => "PROPN",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "NOUN" => Some(MorphPos::Noun),
            "VERB" => Some(MorphPos::Verb),
            "ADJ" => Some(MorphPos::Adj),
            "ADV" => Some(MorphPos::Adv),
            "PROPN" => Some(MorphPos::Propn),
            _ => None,
        }
    }
}

/// Penn treebank inflection tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum MorphTag {
    NN,
    NNS,
    NNP,
    NNPS,
    VB,
    VBD,
    VBG,
    VBN,
    VBP,
    VBZ,
    JJ,
    JJR,
    JJS,
    RB,
    RBR,
    RBS,
}

impl MorphTag {
    pub fn from_str(s: &str) -> Option<Self> {
        let tag = match s.to_uppercase().as_str() {
            "NN" => MorphTag::NN,
            "NNS" => MorphTag::NNS,
            "NNP" => MorphTag::NNP,
            "NNPS" => MorphTag::NNPS,
            "VB" => MorphTag::VB,
            "VBD" => MorphTag::VBD,
            "VBG" => MorphTag::VBG,
            "VBN" => MorphTag::VBN,
            "VBP" => MorphTag::VBP,
            "VBZ" => MorphTag::VBZ,
            "JJ" => MorphTag::JJ,
            "JJR" => MorphTag::JJR,
            "JJS" => MorphTag::JJS,
            "RB" => MorphTag::RB,
            "RBR" => MorphTag::RBR,
            "RBS" => MorphTag::RBS,
            _ => return None,
        };
        Some(tag)
    }

    /// Coarse part of speech the tag belongs to
    pub fn pos(&self) -> MorphPos {
        match self {
            MorphTag::NN | MorphTag::NNS => MorphPos::Noun,
            MorphTag::NNP | MorphTag::NNPS => MorphPos::Propn,
            MorphTag::VB
            | MorphTag::VBD
            | MorphTag::VBG
            | MorphTag::VBN
            | MorphTag::VBP
            | MorphTag::VBZ => MorphPos::Verb,
            MorphTag::JJ | MorphTag::JJR | MorphTag::JJS => MorphPos::Adj,
            MorphTag::RB | MorphTag::RBR | MorphTag::RBS => MorphPos::Adv,
        }
    }
}

/// Inflected forms of one word grouped by tag
pub type Inflections = BTreeMap<MorphTag, Vec<String>>;

/// Inflection lookup for languages with inflectional morphology
pub trait MorphologyProvider: Send + Sync {
    /// Known inflections of `word`, every part of speech when `pos` is `None`.
    ///
    /// Returns an empty map for words the provider does not know.
    fn inflect(&self, word: &str, pos: Option<MorphPos>) -> Result<Inflections, ProviderError>;

    /// Rule based inflections for out-of-vocabulary words
    fn inflect_oov(&self, word: &str, pos: MorphPos) -> Result<Inflections, ProviderError>;
}

/// Word usage frequency on a log scale (Zipf: 0 = unknown, ~8 = most common)
pub trait FrequencyProvider: Send + Sync {
    fn zipf_frequency(&self, word: &str, language: &str) -> Result<f32, ProviderError>;
}
