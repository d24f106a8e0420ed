//! Polarity and modifier word lists.

use once_cell::sync::Lazy;
use std::collections::HashSet;

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

/// Words that contribute +1 before modifiers.
pub static POSITIVE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "good", "great", "awesome", "excellent", "happy", "love", "wonderful", "fantastic",
        "amazing", "beautiful", "best", "perfect", "brilliant", "delighted", "excited",
        "grateful", "lovely", "outstanding", "pleased", "terrific", "thrilled", "superb",
        "magnificent", "marvelous", "enjoy", "positive", "joy", "joyful", "pleasant",
        "satisfied", "success", "successful", "win", "winning", "victory", "victorious",
        "achievement", "achieve", "accomplished", "accomplishment", "impressive", "exceptional",
        "extraordinary", "remarkable", "incredible", "splendid", "sublime", "adore", "cherish",
        "delight", "delightful", "glad", "happiness", "cheerful", "blessing", "blessed",
        "fortunate", "lucky", "prosperous", "triumph", "triumphant",
    ])
});

/// Words that contribute -1 before modifiers.
pub static NEGATIVE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "bad", "terrible", "awful", "horrible", "sad", "hate", "worst", "poor", "disappointing",
        "negative", "wrong", "failed", "ugly", "angry", "furious", "upset", "irritated",
        "frustrated", "annoyed", "miserable", "devastated", "dreadful", "inferior", "pathetic",
        "inadequate", "mediocre", "disastrous", "ruined", "broken", "abysmal", "atrocious",
        "appalling", "dire", "grim", "bleak", "depressing", "depressed", "unhappy", "sorrowful",
        "regretful", "remorseful", "despairing", "despair", "grief", "grievous", "lamentable",
        "woeful", "wretched", "painful", "hurt", "distressed", "suffering", "agony", "agonizing",
        "unbearable", "intolerable",
    ])
});

/// Words that flip the polarity of the next sentiment word in the clause.
pub static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "not", "no", "never", "neither", "nor", "barely", "hardly", "scarcely", "seldom",
        "don't", "doesn't", "didn't", "won't", "wouldn't", "can't", "cannot", "couldn't",
    ])
});

/// Words that amplify the next sentiment word.
pub static INTENSIFIERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "very", "extremely", "absolutely", "completely", "totally", "utterly", "really", "truly",
        "highly", "especially", "exceedingly", "immensely", "enormously", "extraordinarily",
    ])
});

/// Words that soften the next sentiment word.
///
/// `barely`, `hardly`, `scarcely` and `seldom` also appear in [`NEGATIONS`],
/// which is consulted first, so they always negate.
pub static DIMINISHERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "somewhat", "slightly", "barely", "hardly", "scarcely", "rarely", "seldom",
        "occasionally", "partially", "relatively", "moderately",
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_sets_disjoint() {
        assert!(POSITIVE.is_disjoint(&NEGATIVE));
    }

    #[test]
    fn test_modifiers_not_polar() {
        for word in INTENSIFIERS.iter().chain(DIMINISHERS.iter()).chain(NEGATIONS.iter()) {
            assert!(!POSITIVE.contains(word), "{} is both modifier and positive", word);
            assert!(!NEGATIVE.contains(word), "{} is both modifier and negative", word);
        }
    }
}
