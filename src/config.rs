//! Configuration for the Glossa text-analysis engine.

use crate::error::{GlossaError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for the Glossa engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sentiment scoring configuration.
    pub sentiment: SentimentConfig,

    /// Chatbot configuration.
    pub chat: ChatConfig,

    /// Batch analysis configuration.
    pub batch: BatchConfig,
}

impl Config {
    /// Loads configuration from a JSON file.
    ///
    /// Missing sections and fields fall back to their defaults. The loaded
    /// configuration is validated before it is returned.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every section holds usable values.
    pub fn validate(&self) -> Result<()> {
        self.sentiment.validate()
    }
}

/// Sentiment scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// Normalized scores strictly above this are labelled positive.
    /// Default: 0.15.
    pub positive_threshold: f64,

    /// Normalized scores strictly below this are labelled negative.
    /// Default: -0.15.
    pub negative_threshold: f64,

    /// Weight applied to the next polarity word after an intensifier.
    /// Default: 1.5.
    pub intensifier_multiplier: f64,

    /// Weight applied to the next polarity word after a diminisher.
    /// Default: 0.5.
    pub diminisher_multiplier: f64,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            positive_threshold: 0.15,
            negative_threshold: -0.15,
            intensifier_multiplier: 1.5,
            diminisher_multiplier: 0.5,
        }
    }
}

impl SentimentConfig {
    /// Rejects inverted thresholds and non-positive multipliers.
    pub fn validate(&self) -> Result<()> {
        if !self.positive_threshold.is_finite() || !self.negative_threshold.is_finite() {
            return Err(GlossaError::Config(
                "sentiment thresholds must be finite".to_string(),
            ));
        }
        if self.negative_threshold > self.positive_threshold {
            return Err(GlossaError::Config(format!(
                "negative_threshold ({}) exceeds positive_threshold ({})",
                self.negative_threshold, self.positive_threshold
            )));
        }
        for (name, value) in [
            ("intensifier_multiplier", self.intensifier_multiplier),
            ("diminisher_multiplier", self.diminisher_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GlossaError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Chatbot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Random seed for fallback reply selection.
    /// Default: None (seeded from entropy).
    pub seed: Option<u64>,
}

/// Batch analysis configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Number of parallel threads for batch analysis.
    /// Default: 0 (use all available cores).
    pub num_threads: usize,
}
