//! Closed word lists for each part-of-speech category.
//!
//! Lists overlap (`few` is a pronoun, an adjective and a determiner); lookup
//! order in [`CATEGORIES`] decides which tag wins.

use super::PosTag;
use once_cell::sync::Lazy;
use std::collections::HashSet;

const NOUNS: &[&str] = &[
    "time", "person", "year", "way", "day", "thing", "man", "world", "life", "hand", "part",
    "child", "eye", "woman", "place", "work", "week", "case", "point", "government", "company",
    "number", "group", "problem", "fact", "cat", "dog", "house", "tree", "book", "car", "city",
    "food", "computer", "phone", "table", "chair", "window", "door", "floor", "wall", "room",
    "family", "history", "money", "water", "people", "business", "issue", "team", "area",
    "program", "question", "job", "home", "school", "country", "state", "information", "power",
    "data", "system", "research", "development", "software", "hardware", "user", "news", "idea",
    "solution", "project", "product", "market", "industry", "story", "internet", "website",
    "browser", "application",
];

const PROPER_NOUNS: &[&str] = &[
    // places
    "london", "paris", "tokyo", "berlin", "rome", "madrid", "moscow", "beijing", "nyc", "york",
    "angeles", "francisco", "chicago", "boston", "seattle", "washington", "dallas", "miami",
    "atlanta", "denver", "america", "europe", "asia", "africa", "australia", "india", "china",
    "japan", "brazil", "canada", "mexico", "germany", "france", "italy", "spain", "russia", "uk",
    "states", "kingdom", "zealand",
    // organizations
    "google", "microsoft", "apple", "amazon", "facebook", "tesla", "samsung", "ibm", "netflix",
    "twitter", "intel", "nike", "coca-cola", "toyota", "disney", "adidas",
    // calendar
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "january",
    "february", "march", "april", "may", "june", "july", "august", "september", "october",
    "november", "december",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "myself", "yourself", "himself", "herself", "itself",
    "ourselves", "themselves", "this", "that", "these", "those", "who", "whom", "whose", "which",
    "what", "whatever", "whoever", "whomever", "anyone", "everyone", "someone", "anything",
    "everything", "something", "nothing", "nobody", "everybody", "somebody", "few", "many",
    "several", "all", "some", "none", "one", "both", "either", "neither",
];

const VERBS: &[&str] = &[
    // be / have / do
    "am", "is", "are", "was", "were", "be", "being", "been", "have", "has", "had", "having",
    "do", "does", "did", "doing",
    // modals
    "can", "could", "may", "might", "shall", "should", "will", "would", "must",
    // common verbs and their inflections
    "go", "goes", "going", "went", "gone", "make", "makes", "making", "made", "take", "takes",
    "taking", "took", "taken", "get", "gets", "getting", "got", "see", "sees", "seeing", "saw",
    "seen", "know", "knows", "knowing", "knew", "known", "want", "wants", "wanting", "wanted",
    "think", "thinks", "thinking", "thought", "come", "comes", "coming", "came", "look", "looks",
    "looking", "looked", "use", "uses", "using", "used", "find", "finds", "finding", "found",
    "give", "gives", "giving", "gave", "given", "tell", "tells", "telling", "told", "work",
    "works", "working", "worked", "call", "calls", "calling", "called", "try", "tries", "trying",
    "tried", "ask", "asks", "asking", "asked", "need", "needs", "needing", "needed", "feel",
    "feels", "feeling", "felt", "become", "becomes", "becoming", "became", "leave", "leaves",
    "leaving", "left", "put", "puts", "putting", "mean", "means", "meaning", "meant", "keep",
    "keeps", "keeping", "kept", "let", "lets", "letting", "begin", "begins", "beginning",
    "began", "begun", "help", "helps", "helping", "helped", "talk", "talks", "talking",
    "talked", "turn", "turns", "turning", "turned", "start", "starts", "starting", "started",
    "show", "shows", "showing", "showed", "shown", "hear", "hears", "hearing", "heard", "play",
    "plays", "playing", "played", "run", "runs", "running", "ran", "move", "moves", "moving",
    "moved", "live", "lives", "living", "lived", "believe", "believes", "believing", "believed",
    "bring", "brings", "bringing", "brought", "happen", "happens", "happening", "happened",
    "write", "writes", "writing", "wrote", "written", "provide", "provides", "providing",
    "provided", "sit", "sits", "sitting", "sat", "stand", "stands", "standing", "stood", "lose",
    "loses", "losing", "lost", "pay", "pays", "paying", "paid", "meet", "meets", "meeting",
    "met", "include", "includes", "including", "included", "learn", "learns", "learning",
    "learned", "learnt", "change", "changes", "changing", "changed", "lead", "leads", "leading",
    "led", "understand", "understands", "understanding", "understood", "watch", "watches",
    "watching", "watched", "follow", "follows", "following", "followed",
];

const ADJECTIVES: &[&str] = &[
    "good", "new", "first", "last", "long", "great", "little", "own", "other", "old", "right",
    "big", "high", "different", "small", "large", "next", "early", "young", "important", "few",
    "public", "bad", "same", "able", "beautiful", "happy", "nice", "sad", "angry", "smart",
    "clever", "rich", "poor", "thick", "thin", "hot", "cold", "warm", "cool", "easy", "hard",
    "free", "true", "false", "real", "full", "empty", "cheap", "expensive", "flat", "round",
    "slow", "fast", "deep", "shallow", "clean", "dirty", "strong", "weak", "safe", "dangerous",
    "terrible", "horrible", "fantastic", "wonderful", "amazing", "awful", "perfect", "simple",
    "complex", "basic", "advanced", "effective", "ineffective", "efficient", "inefficient",
    "reliable", "unreliable", "useful", "useless", "interesting", "boring", "exciting", "dull",
    "bright", "dark", "light", "heavy",
];

const ADVERBS: &[&str] = &[
    "very", "also", "often", "however", "too", "usually", "really", "early", "never", "always",
    "sometimes", "together", "likely", "simply", "generally", "instead", "actually", "again",
    "rather", "almost", "especially", "ever", "quickly", "probably", "already", "below",
    "directly", "therefore", "else", "thus", "easily", "eventually", "exactly", "certainly",
    "normally", "currently", "extremely", "finally", "constantly", "properly", "soon",
    "specifically", "suddenly", "tomorrow", "yesterday", "tonight", "alone", "ahead", "super",
    "maybe", "otherwise", "entirely", "anyway", "perfectly", "seriously", "obviously", "clearly",
    "definitely", "absolutely", "completely", "totally", "fully", "significantly",
    "deliberately", "merely", "solely", "virtually", "somewhere", "anywhere", "everywhere",
    "nowhere", "somehow", "anyhow", "nonetheless", "nevertheless", "notwithstanding", "yet",
    "still", "further", "furthermore",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "to", "for", "with", "on", "at", "from", "by", "about", "as", "into", "like",
    "through", "after", "over", "between", "out", "against", "during", "without", "before",
    "under", "around", "among", "until", "within", "along", "above", "behind", "near", "since",
    "across", "despite", "towards", "inside", "upon", "concerning", "unto", "amid", "throughout",
    "beside", "besides", "except", "beyond", "underneath", "beneath", "versus", "outside",
];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "some", "any", "many", "much", "few", "little", "other", "another", "such", "what",
    "whatever", "which", "whichever", "either", "neither", "each", "every", "both", "all",
    "half", "several", "enough", "own", "certain",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "yet", "so", "for", "nor", "because", "although", "though", "while",
    "if", "unless", "until", "since", "when", "whenever", "where", "wherever", "after", "before",
    "as", "whether", "than", "that", "who", "whoever", "whom", "whomever", "whose", "which",
    "whichever", "what", "whatever", "how", "however", "therefore", "thus", "consequently",
    "furthermore", "moreover", "nevertheless", "meanwhile",
];

const INTERJECTIONS: &[&str] = &[
    "oh", "wow", "ouch", "oops", "hey", "hi", "hello", "bye", "goodbye", "yeah", "well", "hmm",
    "uh", "er", "um", "ah", "yikes", "gosh", "golly", "aha", "yay", "hurray", "bingo", "alas",
    "damn", "darn", "shoot", "whoa", "bravo", "hooray", "congratulations", "ha", "thanks",
    "please", "ok", "okay",
];

/// Category word lists in lookup order. The first list containing a word wins.
pub static CATEGORIES: Lazy<Vec<(PosTag, HashSet<&'static str>)>> = Lazy::new(|| {
    [
        (PosTag::Noun, NOUNS),
        (PosTag::ProperNoun, PROPER_NOUNS),
        (PosTag::Pronoun, PRONOUNS),
        (PosTag::Verb, VERBS),
        (PosTag::Adjective, ADJECTIVES),
        (PosTag::Adverb, ADVERBS),
        (PosTag::Preposition, PREPOSITIONS),
        (PosTag::Determiner, DETERMINERS),
        (PosTag::Conjunction, CONJUNCTIONS),
        (PosTag::Interjection, INTERJECTIONS),
    ]
    .into_iter()
    .map(|(tag, words)| (tag, words.iter().copied().collect()))
    .collect()
});

/// Returns the first category whose list contains `lowered`.
pub fn lookup(lowered: &str) -> Option<PosTag> {
    CATEGORIES
        .iter()
        .find(|(_, words)| words.contains(lowered))
        .map(|(tag, _)| *tag)
}

/// True if `lowered` appears in the list for `tag`.
pub fn in_category(tag: PosTag, lowered: &str) -> bool {
    CATEGORIES
        .iter()
        .any(|(t, words)| *t == tag && words.contains(lowered))
}
