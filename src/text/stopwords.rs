//! Stopword filtering.

use crate::text::tokenizer::is_punctuation;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// English stopwords, including common contractions and their fragments.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
        "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
        "for", "with", "about", "against", "between", "into", "through", "during", "before",
        "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
        "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
        "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
        "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
        "will", "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o", "re",
        "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn",
        "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't",
        "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
        "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
        "wouldn't",
    ]
    .into_iter()
    .collect()
});

/// A filter for removing stopwords, punctuation and single characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopwordFilter;

impl StopwordFilter {
    /// Creates a new stopword filter.
    pub fn new() -> Self {
        Self
    }

    /// Checks if a word is a stopword (case-insensitive).
    pub fn is_stopword(&self, word: &str) -> bool {
        STOPWORDS.contains(word.to_lowercase().as_str())
    }

    /// Returns true if the token survives filtering.
    pub fn keep(&self, token: &str) -> bool {
        !self.is_stopword(token) && !is_punctuation(token) && token.chars().count() > 1
    }

    /// Filters a token sequence, preserving order.
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|t| self.keep(t))
            .map(str::to_string)
            .collect()
    }

    /// Number of entries in the stopword list.
    pub fn len(&self) -> usize {
        STOPWORDS.len()
    }

    /// Whether the stopword list is empty.
    pub fn is_empty(&self) -> bool {
        STOPWORDS.is_empty()
    }
}

/// Removes stopwords with the default filter.
pub fn remove_stopwords<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    StopwordFilter.filter(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;

    #[test]
    fn test_is_stopword() {
        let filter = StopwordFilter::new();
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("don't"));
        assert!(!filter.is_stopword("rust"));
    }

    #[test]
    fn test_remove_stopwords() {
        let tokens = tokenize("The cat and the dog are good friends.");
        let filtered = remove_stopwords(&tokens);
        assert_eq!(filtered, vec!["cat", "dog", "good", "friends"]);
    }

    #[test]
    fn test_single_characters_dropped() {
        let filtered = remove_stopwords(&["x", "b", "ok", "!"]);
        assert_eq!(filtered, vec!["ok"]);
    }

    #[test]
    fn test_contractions_dropped() {
        let tokens = tokenize("I wouldn't say it's bad");
        let filtered = remove_stopwords(&tokens);
        // "it's" is not listed, only its fragments are
        assert_eq!(filtered, vec!["say", "it's", "bad"]);
    }

    #[test]
    fn test_empty() {
        let empty: Vec<String> = Vec::new();
        assert!(remove_stopwords(&empty).is_empty());
    }

    #[test]
    fn test_list_size() {
        let filter = StopwordFilter::new();
        assert!(filter.len() > 120);
        assert!(!filter.is_empty());
    }
}
