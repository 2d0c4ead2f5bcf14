use crate::constants::STOP_WORDS;
use crate::types::Token;
use std::collections::HashSet;

/// The built-in English stop words as an owned, lowercased set.
pub fn default_stop_words() -> HashSet<Token> {
    STOP_WORDS.iter().map(|word| word.to_lowercase()).collect()
}
