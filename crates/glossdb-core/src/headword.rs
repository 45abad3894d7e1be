use std::collections::BTreeSet;

use crate::error::ProviderError;
use crate::language::{MorphPos, MorphologyProvider};

/// Structure of a dictionary headword, decides how it expands into surface forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadwordShape<'a> {
    /// Unbalanced, nested or empty parentheses, an empty `/` alternative,
    /// or leading/trailing whitespace. Kept as one literal form.
    Malformed(&'a str),
    /// `(as) good as new`: both readings, with and without the parenthesized words
    Parenthetical {
        with_inner: String,
        without_inner: String,
    },
    /// `be/get togged up/out`: per whitespace token alternatives
    Alternated(Vec<Vec<&'a str>>),
    /// Multi-word phrase split after its first word
    Phrase { head: &'a str, rest: &'a str },
    /// `A-bomb`
    Hyphenated(&'a str),
    Single(&'a str),
}

impl<'a> HeadwordShape<'a> {
    pub fn parse(headword: &'a str) -> Self {
        if headword.contains('(') {
            if !has_balanced_parentheses(headword) {
                return HeadwordShape::Malformed(headword);
            }
            return HeadwordShape::Parenthetical {
                with_inner: headword.replace(['(', ')'], ""),
                without_inner: drop_parenthesized(headword),
            };
        }

        if headword.contains('/') {
            let alternatives: Vec<Vec<&str>> = headword
                .split_whitespace()
                .map(|token| token.split('/').collect())
                .collect();
            if alternatives.is_empty() || alternatives.iter().flatten().any(|alt| alt.is_empty()) {
                return HeadwordShape::Malformed(headword);
            }
            return HeadwordShape::Alternated(alternatives);
        }

        if headword.contains(char::is_whitespace) {
            if headword.trim() != headword {
                return HeadwordShape::Malformed(headword);
            }
            if let Some((head, rest)) = headword.split_once(char::is_whitespace) {
                return HeadwordShape::Phrase {
                    head,
                    rest: rest.trim_start(),
                };
            }
        }

        if headword.contains('-') {
            HeadwordShape::Hyphenated(headword)
        } else {
            HeadwordShape::Single(headword)
        }
    }
}

/// Every `(` closed before the next one opens, no empty `()`, no stray `)`
fn has_balanced_parentheses(headword: &str) -> bool {
    let mut open = false;
    let mut prev = None;
    for c in headword.chars() {
        match c {
            '(' if open => return false,
            '(' => open = true,
            ')' if !open || prev == Some('(') => return false,
            ')' => open = false,
            _ => {}
        }
        prev = Some(c);
    }
    !open
}

/// Remove each `(...)` span and collapse the whitespace left behind
fn drop_parenthesized(headword: &str) -> String {
    let mut kept = String::with_capacity(headword.len());
    let mut depth = 0usize;
    for c in headword.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => kept.push(c),
            _ => {}
        }
    }
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cartesian product of per-token alternatives, each combination joined by spaces
fn alternative_phrases(alternatives: &[Vec<&str>]) -> Vec<String> {
    alternatives.iter().fold(vec![String::new()], |phrases, options| {
        phrases
            .iter()
            .flat_map(|prefix| {
                options.iter().map(move |option| {
                    if prefix.is_empty() {
                        option.to_string()
                    } else {
                        format!("{prefix} {option}")
                    }
                })
            })
            .collect()
    })
}

/// Alternate spellings of a headword used as extra translation lookup keys.
///
/// Handles parentheses and `/` alternatives only, never inflects.
pub fn normalize_variants(headword: &str) -> BTreeSet<String> {
    match HeadwordShape::parse(headword) {
        HeadwordShape::Parenthetical {
            with_inner,
            without_inner,
        } => {
            let mut variants = normalize_variants(&with_inner);
            variants.extend(normalize_variants(&without_inner));
            variants
        }
        HeadwordShape::Alternated(alternatives) => alternative_phrases(&alternatives).into_iter().collect(),
        _ => BTreeSet::from([headword.to_string()]),
    }
}

/// Expands headwords into every surface form a reader may meet in running text
pub struct FormExpander<'a> {
    morphology: &'a dyn MorphologyProvider,
}

impl<'a> FormExpander<'a> {
    pub fn new(morphology: &'a dyn MorphologyProvider) -> Self {
        Self { morphology }
    }

    /// All surface forms of `headword`, always including the headword itself.
    ///
    /// Only fails when the morphology provider cannot answer.
    pub fn expand_forms(&self, headword: &str, pos: Option<MorphPos>) -> Result<BTreeSet<String>, ProviderError> {
        match HeadwordShape::parse(headword) {
            HeadwordShape::Malformed(literal) => {
                tracing::debug!("Malformed headword kept literal: {}", literal);
                Ok(BTreeSet::from([literal.to_string()]))
            }
            HeadwordShape::Parenthetical {
                with_inner,
                without_inner,
            } => {
                let mut forms = self.expand_forms(&with_inner, pos)?;
                forms.extend(self.expand_forms(&without_inner, pos)?);
                Ok(forms)
            }
            HeadwordShape::Alternated(alternatives) if alternatives.len() > 1 => {
                let mut forms = BTreeSet::new();
                for phrase in alternative_phrases(&alternatives) {
                    forms.extend(self.expand_forms(&phrase, pos)?);
                }
                Ok(forms)
            }
            // `and/or` without spaces is a single token
            HeadwordShape::Alternated(_) => self.expand_token(headword, pos),
            HeadwordShape::Phrase { head, rest } => {
                if pos != Some(MorphPos::Verb) {
                    return Ok(BTreeSet::from([headword.to_string()]));
                }
                // phrasal verb, only the first word inflects
                let mut heads = self.inflections(head, Some(MorphPos::Verb))?;
                heads.insert(head.to_string());
                Ok(heads.into_iter().map(|h| format!("{h} {rest}")).collect())
            }
            HeadwordShape::Hyphenated(_) | HeadwordShape::Single(_) => self.expand_token(headword, pos),
        }
    }

    fn expand_token(&self, token: &str, pos: Option<MorphPos>) -> Result<BTreeSet<String>, ProviderError> {
        if token.contains('-') {
            return Ok(BTreeSet::from([token.to_string()]));
        }
        let mut forms = self.inflections(token, pos)?;
        forms.insert(token.to_string());
        Ok(forms)
    }

    /// Provider forms, retrying with the out-of-vocabulary rules when the lexicon has none
    fn inflections(&self, word: &str, pos: Option<MorphPos>) -> Result<BTreeSet<String>, ProviderError> {
        let mut forms: BTreeSet<String> = self.morphology.inflect(word, pos)?.into_values().flatten().collect();

        if forms.is_empty() {
            if let Some(pos) = pos {
                forms = self.morphology.inflect_oov(word, pos)?.into_values().flatten().collect();
            }
        }

        Ok(forms)
    }
}
