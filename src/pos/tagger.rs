//! Context-sensitive heuristic tagger.

use super::lexicon::{in_category, lookup};
use super::PosTag;
use crate::text::Tokenizer;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("valid number pattern"));

/// Punctuation, bracket and quote characters tagged as [`PosTag::Punctuation`].
const MARKS: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '"', '\''];

const NOUN_SUFFIXES: &[&str] = &["tion", "sion", "ment", "ness", "ity"];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ful", "ous", "ish", "ive", "able", "ible", "al", "ic", "ant", "ent",
];

const ARTICLES: &[&str] = &["the", "a", "an"];

/// A word and the tag assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosToken {
    /// Surface form as it appeared in the text.
    pub word: String,
    /// Assigned category.
    pub pos: PosTag,
}

impl PosToken {
    /// Creates a new tagged token.
    pub fn new(word: impl Into<String>, pos: PosTag) -> Self {
        Self {
            word: word.into(),
            pos,
        }
    }
}

/// Part-of-speech tagger combining word lists, suffixes and neighbours.
#[derive(Debug, Clone)]
pub struct PosTagger {
    tokenizer: Tokenizer,
}

impl Default for PosTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger {
    /// Creates a new tagger.
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::tagging(),
        }
    }

    /// Tags every unit of `text`, one [`PosToken`] per matched unit, in order.
    pub fn tag(&self, text: &str) -> Vec<PosToken> {
        let words = self.tokenizer.tokenize(text);
        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

        words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let pos = tag_at(&words, &lowered, i);
                trace!("{:?} -> {}", word, pos);
                PosToken::new(word.as_str(), pos)
            })
            .collect()
    }
}

/// Tags text with the default tagger.
pub fn pos_tag(text: &str) -> Vec<PosToken> {
    PosTagger::new().tag(text)
}

fn tag_at(words: &[String], lowered: &[String], i: usize) -> PosTag {
    let word = words[i].as_str();
    let low = lowered[i].as_str();

    if NUMBER.is_match(word) {
        return PosTag::Number;
    }

    if is_mark(word) {
        return PosTag::Punctuation;
    }

    if i > 0 && !ends_sentence(&words[i - 1]) && is_capitalized(word) {
        return PosTag::ProperNoun;
    }

    if let Some(tag) = lookup(low) {
        return tag;
    }

    if i == 0 && starts_upper(word) {
        return tag_first_word(word, low);
    }

    if low.ends_with("ly") {
        PosTag::Adverb
    } else if low.ends_with("ing") || low.ends_with("ed") {
        PosTag::Verb
    } else if NOUN_SUFFIXES.iter().any(|s| low.ends_with(s)) {
        PosTag::Noun
    } else if ADJECTIVE_SUFFIXES.iter().any(|s| low.ends_with(s)) {
        PosTag::Adjective
    } else if i > 0 && ARTICLES.contains(&lowered[i - 1].as_str()) {
        PosTag::Noun
    } else if i > 0 && in_category(PosTag::Adjective, &lowered[i - 1]) {
        PosTag::Noun
    } else if i + 1 < words.len() && in_category(PosTag::Verb, &lowered[i + 1]) {
        PosTag::Noun
    } else {
        PosTag::Other
    }
}

/// Rules for an unlisted word opening the text.
fn tag_first_word(word: &str, low: &str) -> PosTag {
    if in_category(PosTag::ProperNoun, low) {
        PosTag::ProperNoun
    } else if in_category(PosTag::Pronoun, low) {
        PosTag::Pronoun
    } else if in_category(PosTag::Verb, low) {
        PosTag::Verb
    } else if word.ends_with("ly") {
        PosTag::Adverb
    } else if word.ends_with("ing") || word.ends_with("ed") {
        PosTag::Verb
    } else {
        PosTag::Noun
    }
}

fn is_mark(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if MARKS.contains(&c))
}

fn ends_sentence(word: &str) -> bool {
    word.trim_end().ends_with(['.', '!', '?'])
}

/// First character is an uppercase letter.
fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// First character is unchanged by upper-casing (letters, digits, symbols).
fn starts_upper(word: &str) -> bool {
    word.chars().next().is_some_and(|c| !c.is_lowercase())
}
