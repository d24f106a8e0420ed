//! # Glossa - Rule-Based Text Analysis
//!
//! Glossa is a small, deterministic text-analysis engine built from
//! hand-written heuristics rather than learned models. Every component is a
//! pure function of its input over read-only word lists, so calls can run
//! concurrently without coordination.
//!
//! ## Components
//!
//! - [`text`] - Tokenization, stemming and stopword removal
//! - [`sentiment`] - Lexicon sentiment with negation and intensity
//! - [`pos`] - Part-of-speech tagging from word lists, suffixes and context
//! - [`language`] - Script and diacritic based language detection
//! - [`analysis`] - All of the above bundled into one report
//! - [`chat`] - A scripted chatbot that scores its own replies
//! - [`transcript`] - Canned transcripts keyed by audio file name
//!
//! ## Quick Start
//!
//! ```rust
//! use glossa::{analyze_sentiment, detect_language, pos_tag, stem, tokenize};
//! use glossa::{Language, PosTag, SentimentLabel};
//!
//! let tokens = tokenize("The children were running!");
//! assert_eq!(tokens, vec!["the", "children", "were", "running", "!"]);
//!
//! let stems: Vec<String> = tokens.iter().map(|t| stem(t)).collect();
//! assert_eq!(stems[1], "child");
//! assert_eq!(stems[3], "run");
//!
//! assert_eq!(analyze_sentiment("I am not happy").label, SentimentLabel::Negative);
//! assert_eq!(detect_language("Hello world"), Language::English);
//! assert_eq!(pos_tag("The cat runs.")[1].pos, PosTag::Noun);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod chat;
pub mod config;
pub mod error;
pub mod language;
pub mod pos;
pub mod sentiment;
pub mod text;
pub mod transcript;

// Re-export commonly used types
pub use analysis::{Analysis, TextAnalyzer};
pub use chat::{ChatBot, Reply, Speaker, Turn};
pub use config::{BatchConfig, ChatConfig, Config, SentimentConfig};
pub use error::{GlossaError, Result};
pub use language::{detect_language, Language};
pub use pos::{pos_tag, PosTag, PosTagger, PosToken};
pub use sentiment::{analyze_sentiment, SentimentLabel, SentimentResult, SentimentScorer};
pub use text::{remove_stopwords, stem, tokenize, Stemmer, StopwordFilter, Tokenizer};
pub use transcript::{transcribe, transcribe_path};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
