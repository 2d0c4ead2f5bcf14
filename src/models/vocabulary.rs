use crate::types::{DocumentFrequency, Token, TokenId, TokenRef};
use crate::utils::sort_by_frequency;
use crate::{Document, Error, Tokenizer};
use log::{debug, info};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// An ordered, fixed-size set of tokens with stable indices and the document frequencies observed
/// in the training corpus it was built from.
///
/// Once built, a `Vocabulary` never changes: test documents are encoded against the frequencies
/// frozen here, never against their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    tokens: Vec<Token>,
    token_map: HashMap<Token, TokenId>,
    document_frequencies: Vec<DocumentFrequency>,
    n_documents: usize,
}

impl Vocabulary {
    /// A vocabulary with no tokens. Every document encodes to an empty vector under it.
    pub fn empty() -> Self {
        Vocabulary {
            tokens: vec![],
            token_map: HashMap::new(),
            document_frequencies: vec![],
            n_documents: 0,
        }
    }

    /// Builds a vocabulary of at most `max_tokens` tokens from `documents`.
    ///
    /// Tokens are ranked by the number of documents they appear in (ties broken
    /// lexicographically). Stop words are dropped before ranking; an n-gram is dropped if any of
    /// its words is a stop word. Stop word matching ignores case.
    pub fn build(
        tokenizer: &Tokenizer,
        documents: &[Document],
        stop_words: &HashSet<Token>,
        max_tokens: usize,
    ) -> Result<Self, Error> {
        info!(
            "Building vocabulary from {} documents (max {} tokens)...",
            documents.len(),
            max_tokens
        );

        let document_frequencies = documents
            .par_iter()
            .map(|document| {
                tokenizer
                    .tokens(document.text())
                    .collect::<HashSet<Token>>()
            })
            .fold(HashMap::new, |mut frequencies, unique_tokens| {
                for token in unique_tokens {
                    *frequencies.entry(token).or_insert(0) += 1;
                }
                frequencies
            })
            .reduce(HashMap::new, merge_frequencies);

        let total_unique_tokens = document_frequencies.len();

        let stop_words: HashSet<Token> =
            stop_words.iter().map(|word| word.to_lowercase()).collect();

        let candidates: HashMap<Token, DocumentFrequency> = document_frequencies
            .into_iter()
            .filter(|(token, _)| !is_stop_token(token, &stop_words))
            .collect();

        debug!(
            "{} unique tokens, {} remain after stop word removal",
            total_unique_tokens,
            candidates.len()
        );

        let ranked: Vec<(Token, DocumentFrequency)> = sort_by_frequency(candidates)
            .into_iter()
            .take(max_tokens)
            .collect();

        if ranked.is_empty() {
            return Err(Error::EmptyVocabularyError(format!(
                "No tokens survived filtering ({} documents, max_tokens = {})",
                documents.len(),
                max_tokens
            )));
        }

        let mut vocabulary = Vocabulary::empty();
        vocabulary.n_documents = documents.len();

        for (token_id, (token, frequency)) in ranked.into_iter().enumerate() {
            vocabulary.token_map.insert(token.clone(), token_id);
            vocabulary.tokens.push(token);
            vocabulary.document_frequencies.push(frequency);
        }

        Ok(vocabulary)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Gets the ID for a token, or None if the token is not present
    pub fn get_token_id(&self, token: &TokenRef) -> Option<TokenId> {
        self.token_map.get(token).copied()
    }

    pub fn get_token_by_id(&self, token_id: TokenId) -> Option<&TokenRef> {
        self.tokens.get(token_id).map(|token| token.as_str())
    }

    /// Tokens in index order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn document_frequency(&self, token_id: TokenId) -> Option<DocumentFrequency> {
        self.document_frequencies.get(token_id).copied()
    }

    /// Size of the corpus the vocabulary was built from.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Inverse document frequency, `ln(N / df)`, for every token in index order.
    pub fn idf_values(&self) -> Vec<f64> {
        let n_documents = self.n_documents as f64;

        self.document_frequencies
            .iter()
            .map(|&frequency| (n_documents / frequency as f64).ln())
            .collect()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::empty()
    }
}

fn merge_frequencies(
    mut left: HashMap<Token, DocumentFrequency>,
    right: HashMap<Token, DocumentFrequency>,
) -> HashMap<Token, DocumentFrequency> {
    for (token, frequency) in right {
        *left.entry(token).or_insert(0) += frequency;
    }
    left
}

fn is_stop_token(token: &TokenRef, stop_words: &HashSet<Token>) -> bool {
    token
        .split(' ')
        .any(|word| stop_words.contains(&word.to_lowercase()))
}
