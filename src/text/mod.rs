//! Text processing module for tokenization, stemming, and stopword removal.

mod stemmer;
mod stopwords;
mod tokenizer;

pub use stemmer::{stem, Stemmer};
pub use stopwords::{remove_stopwords, StopwordFilter};
pub use tokenizer::{is_punctuation, tokenize, Tokenizer, PUNCTUATION};
