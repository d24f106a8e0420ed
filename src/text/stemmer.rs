//! Rule-table suffix stripping.
//!
//! The stemmer reduces one token to an approximate root through an ordered
//! cascade: possessive, irregular plurals, regular plurals, `-ing`, `-ed`,
//! then a table of derivational suffixes. Every stage returns on its first
//! match, so the output is not guaranteed to be a fixed point:
//! `stem("beautifully")` is `"beautiful"` while `stem("beautiful")` is
//! `"beauti"`.

use crate::text::tokenizer::is_punctuation;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Irregular plural forms, checked before any suffix rule.
static IRREGULAR_PLURALS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("children", "child"),
        ("people", "person"),
        ("men", "man"),
        ("women", "woman"),
        ("teeth", "tooth"),
        ("feet", "foot"),
        ("mice", "mouse"),
        ("geese", "goose"),
    ]
    .into_iter()
    .collect()
});

/// Roots that take back a trailing `e` once `-ing` is removed.
const ING_E_ROOTS: &[&str] = &["com", "tim", "nam", "writ", "tak", "mak", "mov", "lov", "giv"];

/// Roots that take back a trailing `e` once `-ed` is removed.
const ED_E_ROOTS: &[&str] = &[
    "liv", "lov", "mov", "hav", "writ", "rid", "mak", "tak", "giv", "com", "car", "dar", "shar",
    "prepar", "declar", "compar",
];

/// Derivational suffix rewrites, first match wins.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("ement", ""),
    ("ment", ""),
    ("ness", ""),
    ("ful", ""),
    ("ity", ""),
    ("ism", ""),
    ("ous", ""),
    ("ive", ""),
    ("ize", ""),
    ("ise", ""),
    ("able", ""),
    ("ible", ""),
    ("ant", ""),
    ("ent", ""),
    ("al", ""),
    ("er", ""),
    ("ly", ""),
];

/// Stateless rule-based stemmer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stemmer;

impl Stemmer {
    /// Creates a new stemmer.
    pub fn new() -> Self {
        Self
    }

    /// Stems a single token.
    ///
    /// Punctuation tokens stem to the empty string. Words of two characters
    /// or fewer are only lower-cased.
    pub fn stem(&self, word: &str) -> String {
        if is_punctuation(word) {
            return String::new();
        }

        let mut result = word.to_lowercase();
        if char_len(&result) <= 2 {
            return result;
        }

        if let Some(owner) = result.strip_suffix("'s") {
            result = owner.to_string();
        }

        if let Some(&singular) = IRREGULAR_PLURALS.get(result.as_str()) {
            return singular.to_string();
        }

        if let Some(singular) = strip_plural(&result) {
            return singular;
        }

        if result.ends_with("ing") {
            return strip_ing(&result);
        }

        if result.ends_with("ed") {
            return strip_ed(&result);
        }

        let len = char_len(&result);
        for &(suffix, replacement) in SUFFIX_RULES {
            if result.ends_with(suffix) && len > suffix.len() + 2 {
                return format!("{}{}", &result[..result.len() - suffix.len()], replacement);
            }
        }

        result
    }

    /// Stems every token in order.
    pub fn stem_all<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens.iter().map(|t| self.stem(t.as_ref())).collect()
    }
}

/// Stems a single token with the default stemmer.
pub fn stem(word: &str) -> String {
    Stemmer.stem(word)
}

#[inline]
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Removes the last `n` characters.
fn drop_chars(s: &str, n: usize) -> &str {
    match s.char_indices().rev().nth(n.saturating_sub(1)) {
        Some((idx, _)) if n > 0 => &s[..idx],
        _ if n == 0 => s,
        _ => "",
    }
}

/// True if the character at `pos` equals the one before it and is not a vowel.
fn is_doubled_consonant(chars: &[char], pos: usize) -> bool {
    if pos == 0 || pos >= chars.len() {
        return false;
    }
    let c = chars[pos];
    c == chars[pos - 1] && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Regular plural endings. `None` means the word falls through to later rules.
fn strip_plural(word: &str) -> Option<String> {
    let len = char_len(word);
    if len <= 3 {
        return None;
    }

    if word.ends_with("ies") {
        Some(format!("{}y", drop_chars(word, 3)))
    } else if word.ends_with("es") || word.ends_with("ss") {
        if word.ends_with("sses") || (word.ends_with("es") && !word.ends_with("ses")) {
            Some(drop_chars(word, 2).to_string())
        } else {
            None
        }
    } else if word.ends_with('s')
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        Some(drop_chars(word, 1).to_string())
    } else {
        None
    }
}

fn strip_ing(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();

    if len > 4 && is_doubled_consonant(&chars, len - 4) {
        return drop_chars(word, 4).to_string();
    }

    let root = drop_chars(word, 3);
    if ING_E_ROOTS.contains(&root) {
        return format!("{}e", root);
    }

    if len > 4 {
        root.to_string()
    } else {
        word.to_string()
    }
}

fn strip_ed(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();

    if len > 3 && is_doubled_consonant(&chars, len - 3) {
        return drop_chars(word, 3).to_string();
    }

    let root = drop_chars(word, 2);
    if ED_E_ROOTS.contains(&root) {
        format!("{}e", root)
    } else {
        root.to_string()
    }
}
