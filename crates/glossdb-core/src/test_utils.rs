use std::collections::HashMap;

use crate::error::ProviderError;
use crate::language::{FrequencyProvider, Inflections, MorphPos, MorphTag, MorphologyProvider};

/// Small fixed lexicon, OOV words get a plain `-s`
pub struct StubMorphology {
    lexicon: HashMap<(String, MorphPos), Inflections>,
}

impl StubMorphology {
    pub fn with_defaults() -> Self {
        let entries: &[(&str, MorphPos, &[(MorphTag, &str)])] = &[
            (
                "run",
                MorphPos::Verb,
                &[
                    (MorphTag::VBD, "ran"),
                    (MorphTag::VBG, "running"),
                    (MorphTag::VBN, "run"),
                    (MorphTag::VBZ, "runs"),
                ],
            ),
            (
                "be",
                MorphPos::Verb,
                &[
                    (MorphTag::VBD, "was"),
                    (MorphTag::VBD, "were"),
                    (MorphTag::VBG, "being"),
                    (MorphTag::VBN, "been"),
                    (MorphTag::VBP, "are"),
                    (MorphTag::VBP, "am"),
                    (MorphTag::VBZ, "is"),
                ],
            ),
            (
                "get",
                MorphPos::Verb,
                &[
                    (MorphTag::VBD, "got"),
                    (MorphTag::VBG, "getting"),
                    (MorphTag::VBN, "gotten"),
                    (MorphTag::VBZ, "gets"),
                ],
            ),
            ("cat", MorphPos::Noun, &[(MorphTag::NNS, "cats")]),
        ];

        let mut lexicon: HashMap<(String, MorphPos), Inflections> = HashMap::new();
        for (word, pos, forms) in entries {
            let inflections = lexicon.entry((word.to_string(), *pos)).or_default();
            for (tag, form) in forms.iter() {
                inflections.entry(*tag).or_default().push(form.to_string());
            }
        }

        Self { lexicon }
    }
}

impl MorphologyProvider for StubMorphology {
    fn inflect(&self, word: &str, pos: Option<MorphPos>) -> Result<Inflections, ProviderError> {
        let mut result = Inflections::new();
        for ((lemma, lemma_pos), inflections) in &self.lexicon {
            if lemma == word && pos.is_none_or(|p| p == *lemma_pos) {
                for (tag, forms) in inflections {
                    result.entry(*tag).or_default().extend(forms.iter().cloned());
                }
            }
        }
        Ok(result)
    }

    fn inflect_oov(&self, word: &str, pos: MorphPos) -> Result<Inflections, ProviderError> {
        let tag = match pos {
            MorphPos::Noun => MorphTag::NNS,
            MorphPos::Propn => MorphTag::NNPS,
            MorphPos::Verb => MorphTag::VBZ,
            MorphPos::Adj | MorphPos::Adv => return Ok(Inflections::new()),
        };
        Ok(Inflections::from([(tag, vec![format!("{word}s")])]))
    }
}

pub struct FailingMorphology;

impl MorphologyProvider for FailingMorphology {
    fn inflect(&self, _word: &str, _pos: Option<MorphPos>) -> Result<Inflections, ProviderError> {
        Err(ProviderError::MorphologyUnavailable("stub".to_string()))
    }

    fn inflect_oov(&self, _word: &str, _pos: MorphPos) -> Result<Inflections, ProviderError> {
        Err(ProviderError::MorphologyUnavailable("stub".to_string()))
    }
}

/// Fixed per-word frequencies for one language
pub struct StubFrequency {
    pub language: String,
    pub frequencies: HashMap<String, f32>,
}

impl StubFrequency {
    pub fn new(language: &str, words: &[(&str, f32)]) -> Self {
        Self {
            language: language.to_string(),
            frequencies: words.iter().map(|(w, f)| (w.to_string(), *f)).collect(),
        }
    }
}

impl FrequencyProvider for StubFrequency {
    fn zipf_frequency(&self, word: &str, language: &str) -> Result<f32, ProviderError> {
        if language != self.language {
            return Err(ProviderError::FrequencyUnavailable(language.to_string()));
        }
        Ok(self.frequencies.get(word).copied().unwrap_or(0.0))
    }
}
