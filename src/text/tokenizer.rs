//! Pattern-based tokenization.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters emitted as standalone punctuation tokens.
pub const PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Word runs (Unicode word characters and apostrophes) or a single clause punctuation mark.
static WORD_OR_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w']+|[.,!?;:]").expect("valid token pattern"));

/// Same as [`WORD_OR_PUNCT`] but also splits out brackets and quotes.
static WORD_OR_MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\w']+|[.,!?;:()\[\]"']"#).expect("valid tagging pattern"));

/// Returns true if `token` is exactly one clause punctuation character.
#[inline]
pub fn is_punctuation(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if PUNCTUATION.contains(&c))
}

/// Tokenizer that splits text into word and punctuation units.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: &'static Regex,
    lowercase: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Creates the analysis tokenizer: lower-cased words plus `. , ! ? ; :`.
    pub fn new() -> Self {
        Self {
            pattern: &WORD_OR_PUNCT,
            lowercase: true,
        }
    }

    /// Creates the tagging tokenizer.
    ///
    /// Case is preserved because capitalization feeds proper-noun detection,
    /// and brackets and quotes come out as their own units.
    pub fn tagging() -> Self {
        Self {
            pattern: &WORD_OR_MARK,
            lowercase: false,
        }
    }

    /// Tokenizes text into a sequence of token strings, left to right.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if self.lowercase {
            let lowered = text.to_lowercase();
            self.collect(&lowered)
        } else {
            self.collect(text)
        }
    }

    fn collect(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Tokenizes text with the default analysis tokenizer.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::new().tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("Hello, world!");
        assert_eq!(tokens, vec!["hello", ",", "world", "!"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
        assert!(tokenize("--- ### ***").is_empty());
    }

    #[test]
    fn test_contractions_kept_whole() {
        let tokens = tokenize("I don't know; it's fine.");
        assert_eq!(tokens, vec!["i", "don't", "know", ";", "it's", "fine", "."]);
    }

    #[test]
    fn test_digits_are_word_characters() {
        let tokens = tokenize("Version 2 of 10");
        assert_eq!(tokens, vec!["version", "2", "of", "10"]);
    }

    #[test]
    fn test_repeated_punctuation_split() {
        let tokens = tokenize("what?!");
        assert_eq!(tokens, vec!["what", "?", "!"]);
    }

    #[test]
    fn test_unicode_tokenization() {
        let tokens = tokenize("Привет мир");
        assert_eq!(tokens, vec!["привет", "мир"]);
    }

    #[test]
    fn test_stable_under_whitespace_normalization() {
        let text = "The  quick,brown fox...   jumps!";
        let tokens = tokenize(text);
        let rejoined = tokens.join(" ");
        assert_eq!(tokenize(&rejoined), tokens);
    }

    #[test]
    fn test_tagging_tokenizer_keeps_case_and_brackets() {
        let tokens = Tokenizer::tagging().tokenize("Call (Bob) \"now\"");
        assert_eq!(tokens, vec!["Call", "(", "Bob", ")", "\"", "now", "\""]);
    }

    #[test]
    fn test_is_punctuation() {
        assert!(is_punctuation("."));
        assert!(is_punctuation(";"));
        assert!(!is_punctuation(".."));
        assert!(!is_punctuation("a"));
        assert!(!is_punctuation("("));
        assert!(!is_punctuation(""));
    }
}
