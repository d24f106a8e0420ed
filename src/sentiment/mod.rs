//! Sentiment scoring over a fixed polarity lexicon.

mod lexicon;
mod scorer;

pub use scorer::{analyze_sentiment, SentimentLabel, SentimentResult, SentimentScorer};
