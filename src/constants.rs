/// Vocabulary size kept when none is requested.
pub const DEFAULT_MAX_TOKENS: usize = 500;

/// Fold count for cross-validation when none is requested.
pub const DEFAULT_FOLD_COUNT: usize = 10;

pub const DEFAULT_SEED: u64 = 1234;

/// Share of the corpus kept for training by `initial_split`.
pub const DEFAULT_TRAIN_PROPORTION: f64 = 0.75;

pub const DEFAULT_PENALTY_GRID_LEVELS: usize = 50;
pub const DEFAULT_PENALTY_GRID_MIN: f64 = 1e-4;
pub const DEFAULT_PENALTY_GRID_MAX: f64 = 1.0;

/// Columns whose population variance falls below this are treated as constant.
pub const MIN_FEATURE_VARIANCE: f64 = 1e-12;

/// English stop words (Snowball list), matched against lowercased tokens.
pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "would",
    "should", "could", "ought", "i'm", "you're", "he's", "she's", "it's", "we're", "they're",
    "i've", "you've", "we've", "they've", "i'd", "you'd", "he'd", "she'd", "we'd", "they'd",
    "i'll", "you'll", "he'll", "she'll", "we'll", "they'll", "isn't", "aren't", "wasn't",
    "weren't", "hasn't", "haven't", "hadn't", "doesn't", "don't", "didn't", "won't", "wouldn't",
    "shan't", "shouldn't", "can't", "cannot", "couldn't", "mustn't", "let's", "that's", "who's",
    "what's", "here's", "there's", "when's", "where's", "why's", "how's", "a", "an", "the",
    "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "will",
];
