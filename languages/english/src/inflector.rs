use std::path::Path;

use glossdb_core::{Inflections, MorphPos, MorphTag, MorphologyProvider, ProviderError, TableError};

use crate::lexicon::Lexicon;
use crate::rules;

/// English morphology: lexicon lookups with regular-rule fallback
pub struct EnglishInflector {
    lexicon: Lexicon,
}

impl EnglishInflector {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Built-in irregulars only
    pub fn with_defaults() -> Self {
        Self::new(Lexicon::with_defaults())
    }

    /// Built-in irregulars plus an optional TSV lexicon
    pub fn with_lexicon_file(path: Option<&Path>) -> Result<Self, TableError> {
        let mut lexicon = Lexicon::with_defaults();
        if let Some(path) = path {
            lexicon.load_from_file(path)?;
        }
        Ok(Self::new(lexicon))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl MorphologyProvider for EnglishInflector {
    fn inflect(&self, word: &str, pos: Option<MorphPos>) -> Result<Inflections, ProviderError> {
        Ok(self.lexicon.get(word, pos))
    }

    fn inflect_oov(&self, word: &str, pos: MorphPos) -> Result<Inflections, ProviderError> {
        let mut inflections = Inflections::new();
        if word.is_empty() {
            return Ok(inflections);
        }

        match pos {
            MorphPos::Noun => {
                inflections.insert(MorphTag::NN, vec![word.to_string()]);
                inflections.insert(MorphTag::NNS, vec![rules::add_s(word)]);
            }
            MorphPos::Propn => {
                inflections.insert(MorphTag::NNP, vec![word.to_string()]);
                inflections.insert(MorphTag::NNPS, vec![rules::add_s(word)]);
            }
            MorphPos::Verb => {
                let past = rules::add_ed(word);
                inflections.insert(MorphTag::VB, vec![word.to_string()]);
                inflections.insert(MorphTag::VBP, vec![word.to_string()]);
                inflections.insert(MorphTag::VBZ, vec![rules::add_s(word)]);
                inflections.insert(MorphTag::VBG, vec![rules::add_ing(word)]);
                inflections.insert(MorphTag::VBD, vec![past.clone()]);
                inflections.insert(MorphTag::VBN, vec![past]);
            }
            MorphPos::Adj => {
                inflections.insert(MorphTag::JJ, vec![word.to_string()]);
                if let Some((comparative, superlative)) = rules::comparison(word) {
                    inflections.insert(MorphTag::JJR, vec![comparative]);
                    inflections.insert(MorphTag::JJS, vec![superlative]);
                }
            }
            MorphPos::Adv => {
                inflections.insert(MorphTag::RB, vec![word.to_string()]);
                // "quickly" -> "more quickly"
                if !word.ends_with("ly") {
                    if let Some((comparative, superlative)) = rules::comparison(word) {
                        inflections.insert(MorphTag::RBR, vec![comparative]);
                        inflections.insert(MorphTag::RBS, vec![superlative]);
                    }
                }
            }
        }

        Ok(inflections)
    }
}
