//! Regular English inflection rules for words missing from the lexicon.

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Rough syllable count: groups of consecutive vowels (and `y` after a consonant)
fn syllables(word: &str) -> usize {
    let mut count = 0;
    let mut prev_vowel = false;
    for c in word.chars() {
        let vowel = is_vowel(c) || (c == 'y' && !prev_vowel);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }
    // silent final e: "make", "cute"
    if count > 1 && word.ends_with('e') && !word.ends_with("le") {
        count -= 1;
    }
    count.max(1)
}

/// Last three chars as consonant-vowel-consonant, final consonant not w/x/y
fn ends_cvc(word: &str) -> bool {
    let chars: Vec<char> = word.chars().rev().take(3).collect();
    match chars.as_slice() {
        [last, mid, first] => {
            is_consonant(*last) && !matches!(last, 'w' | 'x' | 'y') && is_vowel(*mid) && is_consonant(*first)
        }
        _ => false,
    }
}

/// Monosyllables like "stop", "big" double their final consonant
fn doubles_final_consonant(word: &str) -> bool {
    ends_cvc(word) && syllables(word) == 1
}

fn double_last(word: &str) -> String {
    match word.chars().last() {
        Some(last) => format!("{word}{last}"),
        None => word.to_string(),
    }
}

fn ends_consonant_y(word: &str) -> bool {
    let mut chars = word.chars().rev();
    matches!((chars.next(), chars.next()), (Some('y'), Some(c)) if is_consonant(c))
}

fn ends_consonant_o(word: &str) -> bool {
    let mut chars = word.chars().rev();
    matches!((chars.next(), chars.next()), (Some('o'), Some(c)) if is_consonant(c))
}

fn without_last(word: &str) -> &str {
    match word.char_indices().last() {
        Some((idx, _)) => &word[..idx],
        None => word,
    }
}

/// Plural nouns and third person singular verbs
pub fn add_s(word: &str) -> String {
    if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| word.ends_with(suffix)) || ends_consonant_o(word) {
        format!("{word}es")
    } else if ends_consonant_y(word) {
        format!("{}ies", without_last(word))
    } else {
        format!("{word}s")
    }
}

/// Simple past and past participle of regular verbs
pub fn add_ed(word: &str) -> String {
    if word.ends_with('e') {
        format!("{word}d")
    } else if ends_consonant_y(word) {
        format!("{}ied", without_last(word))
    } else if doubles_final_consonant(word) {
        format!("{}ed", double_last(word))
    } else {
        format!("{word}ed")
    }
}

pub fn add_ing(word: &str) -> String {
    if word.ends_with("ie") {
        format!("{}ying", &word[..word.len() - 2])
    } else if word.ends_with('e') && !["ee", "ye", "oe"].iter().any(|s| word.ends_with(s)) && word.len() > 2 {
        format!("{}ing", without_last(word))
    } else if doubles_final_consonant(word) {
        format!("{}ing", double_last(word))
    } else {
        format!("{word}ing")
    }
}

/// Comparative and superlative, `None` for words that take "more"/"most"
pub fn comparison(word: &str) -> Option<(String, String)> {
    let count = syllables(word);
    if ends_consonant_y(word) && count <= 2 {
        let stem = without_last(word);
        return Some((format!("{stem}ier"), format!("{stem}iest")));
    }
    if count > 1 {
        return None;
    }
    if word.ends_with('e') {
        Some((format!("{word}r"), format!("{word}st")))
    } else if doubles_final_consonant(word) {
        let doubled = double_last(word);
        Some((format!("{doubled}er"), format!("{doubled}est")))
    } else {
        Some((format!("{word}er"), format!("{word}est")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_s() {
        assert_eq!(add_s("cat"), "cats");
        assert_eq!(add_s("box"), "boxes");
        assert_eq!(add_s("church"), "churches");
        assert_eq!(add_s("city"), "cities");
        assert_eq!(add_s("day"), "days");
        assert_eq!(add_s("hero"), "heroes");
        assert_eq!(add_s("go"), "goes");
    }

    #[test]
    fn test_add_ed() {
        assert_eq!(add_ed("walk"), "walked");
        assert_eq!(add_ed("bake"), "baked");
        assert_eq!(add_ed("carry"), "carried");
        assert_eq!(add_ed("stop"), "stopped");
        assert_eq!(add_ed("visit"), "visited");
        assert_eq!(add_ed("play"), "played");
        assert_eq!(add_ed("fix"), "fixed");
    }

    #[test]
    fn test_add_ing() {
        assert_eq!(add_ing("walk"), "walking");
        assert_eq!(add_ing("bake"), "baking");
        assert_eq!(add_ing("lie"), "lying");
        assert_eq!(add_ing("see"), "seeing");
        assert_eq!(add_ing("stop"), "stopping");
        assert_eq!(add_ing("be"), "being");
    }

    #[test]
    fn test_comparison() {
        assert_eq!(comparison("fast"), Some(("faster".to_string(), "fastest".to_string())));
        assert_eq!(comparison("big"), Some(("bigger".to_string(), "biggest".to_string())));
        assert_eq!(comparison("nice"), Some(("nicer".to_string(), "nicest".to_string())));
        assert_eq!(comparison("happy"), Some(("happier".to_string(), "happiest".to_string())));
        assert_eq!(comparison("beautiful"), None);
    }
}
