//! Full analysis of a text: every component run once, results bundled.

use crate::config::{BatchConfig, SentimentConfig};
use crate::error::{GlossaError, Result};
use crate::language::{detect_language, Language};
use crate::pos::{PosTagger, PosToken};
use crate::sentiment::{SentimentResult, SentimentScorer};
use crate::text::{Stemmer, StopwordFilter, Tokenizer};
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

/// Everything the engine computes for one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// The analyzed text.
    pub text: String,
    /// Lower-cased word and punctuation tokens.
    pub tokens: Vec<String>,
    /// Stem of each token, aligned with `tokens`. Punctuation stems to "".
    pub stems: Vec<String>,
    /// Tokens left after stopword removal.
    pub filtered: Vec<String>,
    /// Sentiment of the whole text.
    pub sentiment: SentimentResult,
    /// Tagged units, including brackets and quotes.
    pub pos_tags: Vec<PosToken>,
    /// Detected language.
    pub language: Language,
}

impl Analysis {
    /// The `n` most frequent stems of the stopword-filtered tokens.
    ///
    /// Ties keep first-occurrence order.
    pub fn keywords(&self, n: usize) -> Vec<(String, usize)> {
        let stemmer = Stemmer::new();
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for stem in self.filtered.iter().map(|t| stemmer.stem(t)) {
            if stem.is_empty() {
                continue;
            }
            let count = counts.entry(stem.clone()).or_insert(0);
            if *count == 0 {
                order.push(stem);
            }
            *count += 1;
        }

        let mut ranked: Vec<(String, usize)> = order
            .into_iter()
            .map(|stem| {
                let count = counts[&stem];
                (stem, count)
            })
            .collect();
        // stable sort keeps first-occurrence order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Runs every analysis component over input text.
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    tokenizer: Tokenizer,
    stemmer: Stemmer,
    stopwords: StopwordFilter,
    scorer: SentimentScorer,
    tagger: PosTagger,
}

impl TextAnalyzer {
    /// Creates an analyzer with the given sentiment configuration.
    pub fn new(sentiment: SentimentConfig) -> Self {
        Self {
            scorer: SentimentScorer::new(sentiment),
            ..Self::default()
        }
    }

    /// Analyzes a single text.
    pub fn analyze(&self, text: &str) -> Analysis {
        let tokens = self.tokenizer.tokenize(text);
        let stems = self.stemmer.stem_all(&tokens);
        let filtered = self.stopwords.filter(&tokens);
        let sentiment = self.scorer.analyze(text);
        let pos_tags = self.tagger.tag(text);
        let language = detect_language(text);

        debug!(
            "analyzed {} tokens ({} after stopwords), sentiment {} ({:.3}), language {}",
            tokens.len(),
            filtered.len(),
            sentiment.label,
            sentiment.score,
            language
        );

        Analysis {
            text: text.to_string(),
            tokens,
            stems,
            filtered,
            sentiment,
            pos_tags,
            language,
        }
    }

    /// Analyzes many texts in parallel, preserving input order.
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Analysis> {
        info!("Analyzing batch of {} documents", texts.len());
        texts.par_iter().map(|t| self.analyze(t.as_ref())).collect()
    }

    /// Like [`analyze_batch`](Self::analyze_batch) on a dedicated pool when
    /// `config.num_threads` is non-zero.
    pub fn analyze_batch_with<S: AsRef<str> + Sync>(
        &self,
        texts: &[S],
        config: &BatchConfig,
    ) -> Result<Vec<Analysis>> {
        if config.num_threads == 0 {
            return Ok(self.analyze_batch(texts));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.num_threads)
            .build()
            .map_err(|e| GlossaError::Config(format!("thread pool: {}", e)))?;
        Ok(pool.install(|| self.analyze_batch(texts)))
    }
}
