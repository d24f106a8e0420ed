//! Part-of-speech tagging from word lists, suffixes and neighbouring words.

mod lexicon;
mod tagger;

pub use tagger::{pos_tag, PosTagger, PosToken};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammatical category assigned to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosTag {
    /// Common noun.
    Noun,
    /// Name of a person, place, organization or date.
    ProperNoun,
    /// Pronoun.
    Pronoun,
    /// Verb, auxiliary or modal.
    Verb,
    /// Adjective.
    Adjective,
    /// Adverb.
    Adverb,
    /// Preposition.
    Preposition,
    /// Article or other determiner.
    Determiner,
    /// Conjunction.
    Conjunction,
    /// Interjection.
    Interjection,
    /// Integer or decimal literal.
    Number,
    /// Punctuation, bracket or quote.
    Punctuation,
    /// No rule applied.
    Other,
}

impl PosTag {
    /// Upper-case tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::ProperNoun => "PROPER_NOUN",
            PosTag::Pronoun => "PRONOUN",
            PosTag::Verb => "VERB",
            PosTag::Adjective => "ADJECTIVE",
            PosTag::Adverb => "ADVERB",
            PosTag::Preposition => "PREPOSITION",
            PosTag::Determiner => "DETERMINER",
            PosTag::Conjunction => "CONJUNCTION",
            PosTag::Interjection => "INTERJECTION",
            PosTag::Number => "NUMBER",
            PosTag::Punctuation => "PUNCTUATION",
            PosTag::Other => "OTHER",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
