//! Lexicon scoring with clause-bounded negation and intensity.

use super::lexicon::{DIMINISHERS, INTENSIFIERS, NEGATIONS, NEGATIVE, POSITIVE};
use crate::config::SentimentConfig;
use crate::text::{is_punctuation, Tokenizer};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity label derived from a normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Score above the positive threshold.
    Positive,
    /// Score below the negative threshold.
    Negative,
    /// Everything in between.
    Neutral,
}

impl SentimentLabel {
    /// Lower-case label name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized sentiment score and its label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Score in (-1, 1), exactly 0 when no polarity word was seen.
    pub score: f64,
    /// Threshold label of `score`.
    pub label: SentimentLabel,
}

impl SentimentResult {
    /// The result for text without any polarity word.
    pub fn neutral() -> Self {
        Self {
            score: 0.0,
            label: SentimentLabel::Neutral,
        }
    }
}

/// Sentiment scorer over the built-in polarity lexicon.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    config: SentimentConfig,
    tokenizer: Tokenizer,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(SentimentConfig::default())
    }
}

impl SentimentScorer {
    /// Creates a scorer with the given configuration.
    pub fn new(config: SentimentConfig) -> Self {
        Self {
            config,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Returns the scorer configuration.
    pub fn config(&self) -> &SentimentConfig {
        &self.config
    }

    /// Scores text.
    ///
    /// A negation flips the next polarity word; an intensifier or diminisher
    /// scales it. Both reset after that word or at any punctuation mark. The
    /// raw sum is squashed with `tanh(score / sqrt(count + 1))`.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let mut score = 0.0_f64;
        let mut word_count = 0usize;
        let mut negated = false;
        let mut multiplier = 1.0_f64;

        for token in self.tokenizer.tokenize(text) {
            let token = token.as_str();

            if NEGATIONS.contains(token) {
                negated = true;
                continue;
            }
            if INTENSIFIERS.contains(token) {
                multiplier = self.config.intensifier_multiplier;
                continue;
            }
            if DIMINISHERS.contains(token) {
                multiplier = self.config.diminisher_multiplier;
                continue;
            }

            let polarity = if POSITIVE.contains(token) {
                1.0
            } else if NEGATIVE.contains(token) {
                -1.0
            } else {
                0.0
            };

            if polarity != 0.0 {
                let sign = if negated { -polarity } else { polarity };
                let contribution = sign * multiplier;
                trace!("sentiment word {:?} contributes {}", token, contribution);
                score += contribution;
                word_count += 1;
                negated = false;
                multiplier = 1.0;
            } else if is_punctuation(token) {
                negated = false;
                multiplier = 1.0;
            }
        }

        if word_count == 0 {
            return SentimentResult::neutral();
        }

        let normalized = (score / ((word_count + 1) as f64).sqrt()).tanh();
        SentimentResult {
            score: normalized,
            label: self.label(normalized),
        }
    }

    /// Maps a normalized score onto a label.
    pub fn label(&self, score: f64) -> SentimentLabel {
        if score > self.config.positive_threshold {
            SentimentLabel::Positive
        } else if score < self.config.negative_threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Scores text with the default configuration.
pub fn analyze_sentiment(text: &str) -> SentimentResult {
    SentimentScorer::default().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_neutral() {
        let result = analyze_sentiment("");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_no_sentiment_words() {
        let result = analyze_sentiment("The meeting is on Tuesday.");
        assert_eq!(result, SentimentResult::neutral());
    }

    #[test]
    fn test_single_positive() {
        let result = analyze_sentiment("I am happy");
        // tanh(1 / sqrt(2))
        assert!((result.score - (1.0_f64 / 2.0_f64.sqrt()).tanh()).abs() < 1e-12);
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_negation_flips() {
        let result = analyze_sentiment("I am not happy");
        assert!(result.score < 0.0);
        assert_eq!(result.label, SentimentLabel::Negative);

        let result = analyze_sentiment("This is not bad");
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_negation_resets_at_punctuation() {
        let result = analyze_sentiment("Not today, I am happy");
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_negation_consumed_by_first_word() {
        // "not" applies to "good" only; "great" counts positively
        let result = analyze_sentiment("not good great");
        assert_eq!(result.score, 0.0_f64.tanh());
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_intensifier_and_diminisher() {
        let plain = analyze_sentiment("good").score;
        let strong = analyze_sentiment("very good").score;
        let weak = analyze_sentiment("somewhat good").score;
        assert!(strong > plain);
        assert!(weak < plain);
        assert!((strong - (1.5_f64 / 2.0_f64.sqrt()).tanh()).abs() < 1e-12);
    }

    #[test]
    fn test_negated_intensified() {
        let result = analyze_sentiment("really not awful");
        // negation and multiplier both carry to "awful"
        assert!((result.score - (1.5_f64 / 2.0_f64.sqrt()).tanh()).abs() < 1e-12);
    }

    #[test]
    fn test_score_bounded() {
        let text = "amazing ".repeat(500);
        let result = analyze_sentiment(&text);
        assert!(result.score > 0.0 && result.score <= 1.0);
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_mixed_is_neutral() {
        let result = analyze_sentiment("good and bad");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = SentimentConfig {
            positive_threshold: 0.9,
            ..SentimentConfig::default()
        };
        let scorer = SentimentScorer::new(config);
        assert_eq!(scorer.analyze("I am happy").label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(SentimentLabel::Positive.to_string(), "positive");
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Negative).unwrap(),
            "\"negative\""
        );
    }
}
