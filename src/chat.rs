//! Scripted therapy-style chatbot.
//!
//! Replies come from keyword rules, falling back to a random prompt. The
//! random source is injected so conversations can be replayed from a seed.

use crate::config::ChatConfig;
use crate::error::{GlossaError, Result};
use crate::sentiment::{SentimentResult, SentimentScorer};
use crate::text::{remove_stopwords, stem, tokenize};
use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Opening line of every conversation.
pub const GREETING: &str = "Hi there! I'm Eliza, your personal therapy assistant. How are you feeling today? I'm here to listen and help in any way I can.";

/// Keyword rules checked in order; any keyword in the group selects the reply.
const RULES: &[(&[&str], &str)] = &[
    (
        &["anxious", "anxiety"],
        "Anxiety can be really challenging. What are some physical sensations you notice when you feel anxious?",
    ),
    (
        &["sad", "depress"],
        "I'm sorry to hear you're feeling down. Have you noticed any patterns to when these feelings are strongest?",
    ),
    (
        &["happy", "good"],
        "I'm glad to hear you're feeling positive! What do you think contributed to this good feeling?",
    ),
    (
        &["thank"],
        "You're welcome. I'm here to support you whenever you need someone to talk to.",
    ),
];

/// Prompts used when no rule matches.
const FALLBACKS: &[&str] = &[
    "I understand how that might feel. Could you tell me more about what's going on?",
    "Thank you for sharing that with me. How long have you been feeling this way?",
    "It sounds like you're going through a lot. What do you think would help you feel better?",
    "I'm here to listen. Would you like to talk more about how this is affecting you?",
    "That's completely valid. Many people feel that way in similar situations.",
    "I'm curious about what happened next. Would you feel comfortable sharing more?",
    "It takes courage to talk about these things. I appreciate your openness.",
    "Let's explore that feeling a bit more. When did you first notice it?",
    "Remember to be kind to yourself during this process. What small step could you take today?",
    "I'm glad you're reaching out. Sometimes talking about things can help us process them better.",
];

/// Who said a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The person chatting.
    User,
    /// The bot.
    Bot,
}

/// One line of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Who said it.
    pub speaker: Speaker,
    /// What was said.
    pub text: String,
    /// Sentiment of bot replies.
    pub sentiment: Option<SentimentResult>,
}

/// A bot reply and its sentiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    /// Reply text.
    pub text: String,
    /// Sentiment of the reply text.
    pub sentiment: SentimentResult,
}

/// Keyword-driven chatbot with an injected random source.
pub struct ChatBot<R: Rng> {
    rng: R,
    scorer: SentimentScorer,
    history: Vec<Turn>,
}

impl ChatBot<ChaCha8Rng> {
    /// Creates a bot seeded from `config.seed`, or from entropy if unset.
    pub fn from_config(config: &ChatConfig) -> Self {
        let rng = match config.seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> ChatBot<R> {
    /// Creates a bot drawing fallback replies from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            scorer: SentimentScorer::default(),
            history: vec![greeting_turn()],
        }
    }

    /// Replaces the scorer used on replies.
    pub fn with_scorer(mut self, scorer: SentimentScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Responds to a user message and records both lines.
    pub fn respond(&mut self, message: &str) -> Result<Reply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(GlossaError::EmptyInput("chat message".to_string()));
        }

        let tokens = tokenize(message);
        let key_terms: Vec<String> = remove_stopwords(&tokens).iter().map(|t| stem(t)).collect();
        debug!("chat message key terms: {:?}", key_terms);

        let text = self.pick_reply(&message.to_lowercase());
        let sentiment = self.scorer.analyze(text);

        self.history.push(Turn {
            speaker: Speaker::User,
            text: message.to_string(),
            sentiment: None,
        });
        self.history.push(Turn {
            speaker: Speaker::Bot,
            text: text.to_string(),
            sentiment: Some(sentiment),
        });

        Ok(Reply {
            text: text.to_string(),
            sentiment,
        })
    }

    /// The conversation so far, starting with the greeting.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Clears the conversation back to the greeting.
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(greeting_turn());
    }

    fn pick_reply(&mut self, lowered: &str) -> &'static str {
        for &(keywords, reply) in RULES {
            if keywords.iter().any(|k| lowered.contains(k)) {
                return reply;
            }
        }
        FALLBACKS[self.rng.gen_range(0..FALLBACKS.len())]
    }
}

fn greeting_turn() -> Turn {
    Turn {
        speaker: Speaker::Bot,
        text: GREETING.to_string(),
        sentiment: None,
    }
}
