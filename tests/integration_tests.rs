//! Integration tests for the Glossa text-analysis engine.

use glossa::{
    analyze_sentiment, detect_language, pos_tag, remove_stopwords, stem, tokenize, transcribe,
    ChatBot, ChatConfig, Config, GlossaError, Language, PosTag, SentimentConfig, SentimentLabel,
    SentimentScorer, Speaker, StopwordFilter, TextAnalyzer,
};
use std::fs;
use tempfile::tempdir;

/// Mixed sample texts used by the property-style tests.
fn sample_texts() -> Vec<&'static str> {
    vec![
        "",
        "   ",
        "The quick brown fox jumps over the lazy dog.",
        "I am not happy with this at all!",
        "Wow, this is really, REALLY great; thank you?",
        "She said: \"don't worry\" (twice).",
        "Привет, как дела?",
        "Ça va très bien, merci.",
        "東京は大きい都市です",
        "a b c d e f g",
        "It costs 3.50 dollars, maybe 4.",
    ]
}

#[test]
fn test_tokenize_empty() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t\n ").is_empty());
}

#[test]
fn test_stopword_removal_properties() {
    let filter = StopwordFilter::new();
    for text in sample_texts() {
        for token in remove_stopwords(&tokenize(text)) {
            assert!(!filter.is_stopword(&token), "{:?} in {:?}", token, text);
            assert!(token.chars().count() > 1, "{:?} in {:?}", token, text);
            assert!(
                !glossa::text::is_punctuation(&token),
                "{:?} in {:?}",
                token,
                text
            );
        }
    }
}

#[test]
fn test_stem_examples() {
    assert_eq!(stem("running"), "run");
    assert_eq!(stem("coming"), "come");
    assert_eq!(stem("cats"), "cat");
    assert_eq!(stem("children"), "child");
    assert_eq!(stem("a"), "a");
}

#[test]
fn test_stemming_is_not_idempotent() {
    let once = stem("beautifully");
    let twice = stem(&once);
    assert_eq!(once, "beautiful");
    assert_ne!(once, twice);
}

#[test]
fn test_sentiment_negation() {
    let result = analyze_sentiment("I am not happy");
    assert_eq!(result.label, SentimentLabel::Negative);
    assert!(result.score < 0.0);
}

#[test]
fn test_sentiment_empty() {
    let result = analyze_sentiment("");
    assert_eq!(result.score, 0.0);
    assert_eq!(result.label, SentimentLabel::Neutral);
}

#[test]
fn test_sentiment_score_bounds() {
    let texts = [
        "good good good good good good good good good good",
        "terrible awful horrible bad worst",
        "extremely amazing, incredibly wonderful!",
        "not bad",
    ];
    for text in texts.iter().chain(sample_texts().iter()) {
        let result = analyze_sentiment(text);
        assert!(result.score > -1.0 && result.score < 1.0, "{:?}", text);
    }
}

#[test]
fn test_sentiment_label_follows_score() {
    let scorer = SentimentScorer::default();
    for text in sample_texts() {
        let result = scorer.analyze(text);
        assert_eq!(result.label, scorer.label(result.score));
    }
}

#[test]
fn test_detect_language_examples() {
    assert_eq!(detect_language("Hello world"), Language::English);
    assert_eq!(detect_language(""), Language::Unknown);
    assert_ne!(detect_language("héllo"), Language::English);
    assert_ne!(detect_language("héllo"), Language::Unknown);
    assert_eq!(detect_language("Привет"), Language::Russian);
}

#[test]
fn test_pos_tag_example() {
    let tags: Vec<PosTag> = pos_tag("The cat runs.").into_iter().map(|t| t.pos).collect();
    assert_eq!(
        tags,
        vec![PosTag::Determiner, PosTag::Noun, PosTag::Verb, PosTag::Punctuation]
    );
}

#[test]
fn test_tokenize_stable_under_rejoin() {
    for text in sample_texts() {
        let tokens = tokenize(text);
        let rejoined = tokens.join(" ");
        assert_eq!(tokenize(&rejoined), tokens, "{:?}", text);
    }
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("glossa.json");

    let mut config = Config::default();
    config.sentiment.positive_threshold = 0.3;
    config.chat.seed = Some(7);
    config.batch.num_threads = 2;
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.sentiment.positive_threshold, 0.3);
    assert_eq!(loaded.sentiment.negative_threshold, -0.15);
    assert_eq!(loaded.chat.seed, Some(7));
    assert_eq!(loaded.batch.num_threads, 2);
}

#[test]
fn test_config_partial_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(&path, r#"{"chat": {"seed": 11}}"#).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.chat.seed, Some(11));
    assert_eq!(loaded.sentiment.intensifier_multiplier, 1.5);
}

#[test]
fn test_config_invalid_file_rejected() {
    let dir = tempdir().unwrap();

    let inverted = dir.path().join("inverted.json");
    fs::write(
        &inverted,
        r#"{"sentiment": {"positive_threshold": -0.5, "negative_threshold": 0.5}}"#,
    )
    .unwrap();
    assert!(matches!(
        Config::from_file(&inverted),
        Err(GlossaError::Config(_))
    ));

    let malformed = dir.path().join("malformed.json");
    fs::write(&malformed, "{ not json").unwrap();
    assert!(matches!(
        Config::from_file(&malformed),
        Err(GlossaError::Serialization(_))
    ));

    let missing = dir.path().join("missing.json");
    assert!(matches!(Config::from_file(&missing), Err(GlossaError::Io(_))));
}

#[test]
fn test_custom_thresholds_change_labels() {
    let strict = SentimentScorer::new(SentimentConfig {
        positive_threshold: 0.99,
        negative_threshold: -0.99,
        ..SentimentConfig::default()
    });
    assert_eq!(strict.analyze("good").label, SentimentLabel::Neutral);
    assert_eq!(analyze_sentiment("good").label, SentimentLabel::Positive);
}

#[test]
fn test_batch_matches_single_analysis() {
    let analyzer = TextAnalyzer::default();
    let texts = sample_texts();
    let batch = analyzer.analyze_batch(&texts);

    assert_eq!(batch.len(), texts.len());
    for (text, analysis) in texts.iter().zip(&batch) {
        assert_eq!(analysis, &analyzer.analyze(text));
    }
}

#[test]
fn test_transcript_analysis_flow() {
    let transcript = transcribe("customer_complaint.wav");
    let analysis = TextAnalyzer::default().analyze(transcript);
    assert_eq!(analysis.language, Language::English);
    assert!(analysis.filtered.contains(&"refund".to_string()));
    assert_eq!(analysis.pos_tags.last().map(|t| t.pos), Some(PosTag::Punctuation));

    let praise = TextAnalyzer::default().analyze(transcribe("feedback.mp3"));
    assert_eq!(praise.sentiment.label, SentimentLabel::Positive);
}

#[test]
fn test_chat_conversation_flow() {
    let config = ChatConfig { seed: Some(2024) };
    let mut bot = ChatBot::from_config(&config);
    let mut replay = ChatBot::from_config(&config);

    let messages = ["Hi", "I have been anxious", "Work is strange", "thanks"];
    for message in messages {
        assert_eq!(bot.respond(message).unwrap(), replay.respond(message).unwrap());
    }

    let history = bot.history();
    assert_eq!(history.len(), 1 + 2 * messages.len());
    assert_eq!(history.last().map(|t| t.speaker), Some(Speaker::Bot));

    bot.reset();
    assert_eq!(bot.history().len(), 1);
}
