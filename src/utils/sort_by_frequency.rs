use crate::types::{DocumentFrequency, Token};
use std::collections::HashMap;

/// Sorts a mapping of tokens to their document frequencies.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two tokens have the same frequency, sorts by token in ascending
///   lexicographical order for deterministic ordering.
pub fn sort_by_frequency(
    frequencies: HashMap<Token, DocumentFrequency>,
) -> Vec<(Token, DocumentFrequency)> {
    let mut sorted: Vec<(Token, DocumentFrequency)> = frequencies.into_iter().collect();

    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    sorted
}
