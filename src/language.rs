//! Script and diacritic based language detection.
//!
//! Detection is a first-match scan over an ordered pattern table. The strict
//! English pattern must match the whole text, every other pattern only needs
//! a single character, so table order decides mixed-script input.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A detected language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Plain ASCII letters and basic punctuation only.
    English,
    /// Spanish diacritics or inverted marks.
    Spanish,
    /// French diacritics or ligatures.
    French,
    /// German umlauts or eszett.
    German,
    /// Italian grave/acute vowels.
    Italian,
    /// Portuguese tildes and circumflexes.
    Portuguese,
    /// Cyrillic.
    Russian,
    /// CJK unified ideographs.
    Chinese,
    /// Hiragana or katakana.
    Japanese,
    /// Hangul syllables.
    Korean,
    /// Arabic script.
    Arabic,
    /// Devanagari.
    Hindi,
    /// Nothing matched.
    Unknown,
}

impl Language {
    /// Capitalized display name.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Arabic => "Arabic",
            Language::Hindi => "Hindi",
            Language::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static ENGLISH_STRICT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[a-zA-Z\s.,!?'"\-]+$"#).expect("valid English pattern"));

static PATTERNS: Lazy<Vec<(Language, Regex)>> = Lazy::new(|| {
    let table = [
        (Language::Spanish, r"(?i)[áéíóúüñ¿¡]"),
        (Language::French, r"(?i)[àâçéèêëîïôûùüÿœæ]"),
        (Language::German, r"(?i)[äöüß]"),
        (Language::Italian, r"(?i)[àèéìíîòóùú]"),
        (Language::Portuguese, r"(?i)[ãõáéíóúçâêôà]"),
        (Language::Russian, r"[а-яА-Я]"),
        (Language::Chinese, r"[\x{4e00}-\x{9fff}]"),
        (Language::Japanese, r"[\x{3040}-\x{309f}\x{30a0}-\x{30ff}]"),
        (Language::Korean, r"[\x{ac00}-\x{d7af}]"),
        (Language::Arabic, r"[\x{0600}-\x{06ff}]"),
        (Language::Hindi, r"[\x{0900}-\x{097f}]"),
    ];

    let mut patterns = Vec::with_capacity(table.len() + 1);
    patterns.push((Language::English, ENGLISH_STRICT.clone()));
    for (language, pattern) in table {
        patterns.push((language, Regex::new(pattern).expect("valid script pattern")));
    }
    patterns
});

/// Detects the language of `text`.
///
/// Empty or whitespace-only text is [`Language::Unknown`].
pub fn detect_language(text: &str) -> Language {
    if text.trim().is_empty() {
        return Language::Unknown;
    }

    for (language, pattern) in PATTERNS.iter() {
        if pattern.is_match(text) {
            return *language;
        }
    }

    // Latin text with no special characters reads as English
    if ENGLISH_STRICT.is_match(text) {
        return Language::English;
    }

    Language::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_unknown() {
        assert_eq!(detect_language(""), Language::Unknown);
        assert_eq!(detect_language("   \n"), Language::Unknown);
    }

    #[test]
    fn test_english() {
        assert_eq!(detect_language("Hello world"), Language::English);
        assert_eq!(detect_language("It's \"fine\" - really!"), Language::English);
    }

    #[test]
    fn test_diacritics_follow_table_order() {
        // é is in the Spanish class, which precedes French
        assert_eq!(detect_language("héllo"), Language::Spanish);
        assert_eq!(detect_language("Ça va"), Language::French);
        assert_eq!(detect_language("Straße"), Language::German);
        assert_eq!(detect_language("città"), Language::French);
        assert_eq!(detect_language("São Paulo"), Language::Portuguese);
    }

    #[test]
    fn test_case_insensitive_diacritics() {
        assert_eq!(detect_language("ÑANDÚ"), Language::Spanish);
        assert_eq!(detect_language("ÄRGER"), Language::German);
    }

    #[test]
    fn test_scripts() {
        assert_eq!(detect_language("Привет мир"), Language::Russian);
        assert_eq!(detect_language("你好"), Language::Chinese);
        assert_eq!(detect_language("こんにちは"), Language::Japanese);
        assert_eq!(detect_language("안녕하세요"), Language::Korean);
        assert_eq!(detect_language("مرحبا"), Language::Arabic);
        assert_eq!(detect_language("नमस्ते"), Language::Hindi);
    }

    #[test]
    fn test_mixed_script() {
        assert_eq!(detect_language("Hello мир"), Language::Russian);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(detect_language("12345"), Language::Unknown);
        assert_eq!(detect_language("Γειά σου"), Language::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::Portuguese.to_string(), "Portuguese");
        assert_eq!(Language::Unknown.name(), "Unknown");
    }
}
