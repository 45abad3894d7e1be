use std::collections::HashMap;
use std::path::Path;

use glossdb_core::{Inflections, MorphPos, MorphTag, TableError};

use crate::rules;

/// Known inflections keyed by lemma, then part of speech
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, HashMap<MorphPos, Inflections>>,
}

impl Lexicon {
    /// Create empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with the common irregular nouns, verbs, adjectives and adverbs
    pub fn with_defaults() -> Self {
        let mut lexicon = Self::new();

        // (lemma, simple past, past participle), `|` separates alternatives
        let irregular_verbs = [
            ("arise", "arose", "arisen"),
            ("awake", "awoke", "awoken"),
            ("bear", "bore", "borne|born"),
            ("beat", "beat", "beaten"),
            ("become", "became", "become"),
            ("begin", "began", "begun"),
            ("bend", "bent", "bent"),
            ("bet", "bet", "bet"),
            ("bind", "bound", "bound"),
            ("bite", "bit", "bitten"),
            ("bleed", "bled", "bled"),
            ("blow", "blew", "blown"),
            ("break", "broke", "broken"),
            ("breed", "bred", "bred"),
            ("bring", "brought", "brought"),
            ("build", "built", "built"),
            ("burn", "burned|burnt", "burned|burnt"),
            ("buy", "bought", "bought"),
            ("catch", "caught", "caught"),
            ("choose", "chose", "chosen"),
            ("come", "came", "come"),
            ("cost", "cost", "cost"),
            ("creep", "crept", "crept"),
            ("cut", "cut", "cut"),
            ("deal", "dealt", "dealt"),
            ("dig", "dug", "dug"),
            ("do", "did", "done"),
            ("draw", "drew", "drawn"),
            ("dream", "dreamed|dreamt", "dreamed|dreamt"),
            ("drink", "drank", "drunk"),
            ("drive", "drove", "driven"),
            ("eat", "ate", "eaten"),
            ("fall", "fell", "fallen"),
            ("feed", "fed", "fed"),
            ("feel", "felt", "felt"),
            ("fight", "fought", "fought"),
            ("find", "found", "found"),
            ("flee", "fled", "fled"),
            ("fly", "flew", "flown"),
            ("forbid", "forbade", "forbidden"),
            ("forget", "forgot", "forgotten"),
            ("forgive", "forgave", "forgiven"),
            ("freeze", "froze", "frozen"),
            ("get", "got", "got|gotten"),
            ("give", "gave", "given"),
            ("go", "went", "gone"),
            ("grind", "ground", "ground"),
            ("grow", "grew", "grown"),
            ("hang", "hung|hanged", "hung|hanged"),
            ("have", "had", "had"),
            ("hear", "heard", "heard"),
            ("hide", "hid", "hidden"),
            ("hit", "hit", "hit"),
            ("hold", "held", "held"),
            ("hurt", "hurt", "hurt"),
            ("keep", "kept", "kept"),
            ("kneel", "knelt", "knelt"),
            ("know", "knew", "known"),
            ("lay", "laid", "laid"),
            ("lead", "led", "led"),
            ("lean", "leaned|leant", "leaned|leant"),
            ("leap", "leaped|leapt", "leaped|leapt"),
            ("learn", "learned|learnt", "learned|learnt"),
            ("leave", "left", "left"),
            ("lend", "lent", "lent"),
            ("let", "let", "let"),
            ("lie", "lay", "lain"),
            ("light", "lit|lighted", "lit|lighted"),
            ("lose", "lost", "lost"),
            ("make", "made", "made"),
            ("mean", "meant", "meant"),
            ("meet", "met", "met"),
            ("pay", "paid", "paid"),
            ("put", "put", "put"),
            ("quit", "quit", "quit"),
            ("read", "read", "read"),
            ("ride", "rode", "ridden"),
            ("ring", "rang", "rung"),
            ("rise", "rose", "risen"),
            ("run", "ran", "run"),
            ("say", "said", "said"),
            ("see", "saw", "seen"),
            ("seek", "sought", "sought"),
            ("sell", "sold", "sold"),
            ("send", "sent", "sent"),
            ("set", "set", "set"),
            ("shake", "shook", "shaken"),
            ("shine", "shone", "shone"),
            ("shoot", "shot", "shot"),
            ("show", "showed", "shown"),
            ("shrink", "shrank", "shrunk"),
            ("shut", "shut", "shut"),
            ("sing", "sang", "sung"),
            ("sink", "sank", "sunk"),
            ("sit", "sat", "sat"),
            ("sleep", "slept", "slept"),
            ("slide", "slid", "slid"),
            ("speak", "spoke", "spoken"),
            ("spend", "spent", "spent"),
            ("spin", "spun", "spun"),
            ("split", "split", "split"),
            ("spread", "spread", "spread"),
            ("stand", "stood", "stood"),
            ("steal", "stole", "stolen"),
            ("stick", "stuck", "stuck"),
            ("sting", "stung", "stung"),
            ("strike", "struck", "struck"),
            ("swear", "swore", "sworn"),
            ("sweep", "swept", "swept"),
            ("swim", "swam", "swum"),
            ("swing", "swung", "swung"),
            ("take", "took", "taken"),
            ("teach", "taught", "taught"),
            ("tear", "tore", "torn"),
            ("tell", "told", "told"),
            ("think", "thought", "thought"),
            ("throw", "threw", "thrown"),
            ("understand", "understood", "understood"),
            ("wake", "woke", "woken"),
            ("wear", "wore", "worn"),
            ("weep", "wept", "wept"),
            ("win", "won", "won"),
            ("wind", "wound", "wound"),
            ("write", "wrote", "written"),
        ];

        for (lemma, past, participle) in irregular_verbs {
            lexicon.add(lemma, MorphTag::VB, lemma);
            lexicon.add(lemma, MorphTag::VBP, lemma);
            lexicon.add(lemma, MorphTag::VBZ, &rules::add_s(lemma));
            lexicon.add(lemma, MorphTag::VBG, &rules::add_ing(lemma));
            for form in past.split('|') {
                lexicon.add(lemma, MorphTag::VBD, form);
            }
            for form in participle.split('|') {
                lexicon.add(lemma, MorphTag::VBN, form);
            }
        }

        // forms the rules above get wrong
        let verb_overrides = [
            ("be", MorphTag::VB, "be"),
            ("be", MorphTag::VBP, "am"),
            ("be", MorphTag::VBP, "are"),
            ("be", MorphTag::VBZ, "is"),
            ("be", MorphTag::VBD, "was"),
            ("be", MorphTag::VBD, "were"),
            ("be", MorphTag::VBN, "been"),
            ("be", MorphTag::VBG, "being"),
        ];
        for (lemma, tag, form) in verb_overrides {
            lexicon.add(lemma, tag, form);
        }
        lexicon.replace("have", MorphTag::VBZ, "has");

        let irregular_nouns = [
            ("analysis", "analyses"),
            ("child", "children"),
            ("crisis", "crises"),
            ("criterion", "criteria"),
            ("cactus", "cacti"),
            ("deer", "deer"),
            ("fish", "fish|fishes"),
            ("foot", "feet"),
            ("goose", "geese"),
            ("half", "halves"),
            ("knife", "knives"),
            ("leaf", "leaves"),
            ("life", "lives"),
            ("man", "men"),
            ("mouse", "mice"),
            ("ox", "oxen"),
            ("person", "people|persons"),
            ("phenomenon", "phenomena"),
            ("sheep", "sheep"),
            ("thesis", "theses"),
            ("tooth", "teeth"),
            ("wife", "wives"),
            ("wolf", "wolves"),
            ("woman", "women"),
        ];
        for (lemma, plurals) in irregular_nouns {
            lexicon.add(lemma, MorphTag::NN, lemma);
            for plural in plurals.split('|') {
                lexicon.add(lemma, MorphTag::NNS, plural);
            }
        }

        let irregular_comparisons = [
            (MorphPos::Adj, "good", "better", "best"),
            (MorphPos::Adj, "bad", "worse", "worst"),
            (MorphPos::Adj, "far", "farther|further", "farthest|furthest"),
            (MorphPos::Adj, "little", "less", "least"),
            (MorphPos::Adj, "many", "more", "most"),
            (MorphPos::Adj, "much", "more", "most"),
            (MorphPos::Adv, "well", "better", "best"),
            (MorphPos::Adv, "badly", "worse", "worst"),
            (MorphPos::Adv, "far", "farther|further", "farthest|furthest"),
        ];
        for (pos, lemma, comparatives, superlatives) in irregular_comparisons {
            let (base, comparative, superlative) = match pos {
                MorphPos::Adv => (MorphTag::RB, MorphTag::RBR, MorphTag::RBS),
                _ => (MorphTag::JJ, MorphTag::JJR, MorphTag::JJS),
            };
            lexicon.add(lemma, base, lemma);
            for form in comparatives.split('|') {
                lexicon.add(lemma, comparative, form);
            }
            for form in superlatives.split('|') {
                lexicon.add(lemma, superlative, form);
            }
        }

        lexicon
    }

    /// Merge inflections from a TSV file (lemma\tPOS\tTAG\tform format)
    pub fn load_from_file(&mut self, path: &Path) -> Result<usize, TableError> {
        if !path.exists() {
            return Err(TableError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let mut added = 0;

        for (line_no, line) in content.lines().enumerate() {
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() < 4 {
                tracing::debug!("Skipping lexicon line {}: {:?}", line_no + 1, line);
                continue;
            }
            let (Some(pos), Some(tag)) = (MorphPos::from_str(parts[1]), MorphTag::from_str(parts[2])) else {
                tracing::debug!("Unknown POS or tag on lexicon line {}", line_no + 1);
                continue;
            };
            if tag.pos() != pos {
                tracing::debug!("Tag {:?} does not belong to {} on line {}", tag, pos.as_str(), line_no + 1);
                continue;
            }
            self.add(parts[0], tag, parts[3]);
            added += 1;
        }

        tracing::info!("Loaded {} inflections from {}", added, path.display());
        Ok(added)
    }

    fn add(&mut self, lemma: &str, tag: MorphTag, form: &str) {
        let forms = self
            .entries
            .entry(lemma.to_string())
            .or_default()
            .entry(tag.pos())
            .or_default()
            .entry(tag)
            .or_default();
        if !forms.iter().any(|f| f == form) {
            forms.push(form.to_string());
        }
    }

    fn replace(&mut self, lemma: &str, tag: MorphTag, form: &str) {
        if let Some(inflections) = self
            .entries
            .get_mut(lemma)
            .and_then(|by_pos| by_pos.get_mut(&tag.pos()))
        {
            inflections.insert(tag, vec![form.to_string()]);
        }
    }

    /// Inflections of `lemma` for `pos`, or for every part of speech when `pos` is `None`
    pub fn get(&self, lemma: &str, pos: Option<MorphPos>) -> Inflections {
        let Some(by_pos) = self.entries.get(lemma) else {
            return Inflections::new();
        };

        let mut result = Inflections::new();
        for (entry_pos, inflections) in by_pos {
            if pos.is_some_and(|p| p != *entry_pos) {
                continue;
            }
            for (tag, forms) in inflections {
                result.entry(*tag).or_default().extend(forms.iter().cloned());
            }
        }
        result
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.entries.contains_key(lemma)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_verbs() {
        let lexicon = Lexicon::with_defaults();
        let run = lexicon.get("run", Some(MorphPos::Verb));

        assert_eq!(run[&MorphTag::VBD], vec!["ran"]);
        assert_eq!(run[&MorphTag::VBG], vec!["running"]);
        assert_eq!(run[&MorphTag::VBZ], vec!["runs"]);
        assert_eq!(lexicon.get("have", Some(MorphPos::Verb))[&MorphTag::VBZ], vec!["has"]);
        assert_eq!(lexicon.get("be", Some(MorphPos::Verb))[&MorphTag::VBD], vec!["was", "were"]);
    }

    #[test]
    fn test_pos_filter() {
        let lexicon = Lexicon::with_defaults();

        assert!(lexicon.get("far", Some(MorphPos::Verb)).is_empty());
        let any = lexicon.get("far", None);
        assert!(any.contains_key(&MorphTag::JJR));
        assert!(any.contains_key(&MorphTag::RBR));
    }

    #[test]
    fn test_load_from_file_merges() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.tsv");
        std::fs::write(
            &path,
            "# lemma\tpos\ttag\tform\nlouse\tNOUN\tNNS\tlice\nbroken\nlouse\tVERB\tNNS\tbad\n",
        )
        .unwrap();

        let mut lexicon = Lexicon::with_defaults();
        assert_eq!(lexicon.load_from_file(&path).unwrap(), 1);
        assert_eq!(lexicon.get("louse", Some(MorphPos::Noun))[&MorphTag::NNS], vec!["lice"]);
        assert!(lexicon.get("louse", Some(MorphPos::Verb)).is_empty());
    }
}
