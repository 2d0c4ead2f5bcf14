use crate::types::{FeatureVector, Token};
use crate::utils::default_stop_words;
use crate::{Document, Error, FeatureMatrix, Tokenizer, Vocabulary};
use log::info;
use rayon::prelude::*;
use std::collections::HashSet;

/// How token counts become feature values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Weighting {
    /// Raw count of the token in the document.
    TermFrequency,
    /// Count multiplied by `ln(N / df)`, with `N` and `df` frozen in the vocabulary.
    TfIdf,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FeatureEncoderConfig {
    pub tokenizer: Tokenizer,
    pub max_tokens: usize,
    pub weighting: Weighting,
    pub remove_stop_words: bool,
}

/// Encodes a single document under `vocabulary`.
///
/// Out-of-vocabulary tokens contribute nothing; the result always has `vocabulary.len()` entries.
pub fn encode(
    tokenizer: &Tokenizer,
    document: &Document,
    vocabulary: &Vocabulary,
    weighting: Weighting,
) -> FeatureVector {
    let idf_values = match weighting {
        Weighting::TfIdf => vocabulary.idf_values(),
        Weighting::TermFrequency => vec![],
    };

    weigh_token_counts(tokenizer, document, vocabulary, weighting, &idf_values)
}

fn weigh_token_counts(
    tokenizer: &Tokenizer,
    document: &Document,
    vocabulary: &Vocabulary,
    weighting: Weighting,
    idf_values: &[f64],
) -> FeatureVector {
    let mut features = vec![0.0; vocabulary.len()];

    if vocabulary.is_empty() {
        return features;
    }

    for token in tokenizer.tokens(document.text()) {
        if let Some(token_id) = vocabulary.get_token_id(&token) {
            features[token_id] += 1.0;
        }
    }

    if weighting == Weighting::TfIdf {
        for (value, idf) in features.iter_mut().zip(idf_values) {
            *value *= idf;
        }
    }

    features
}

/// The unfitted stage of the text preprocessing pipeline.
///
/// The only way to obtain a `FittedFeatureEncoder` is `fit`, so the vocabulary and document
/// frequencies it carries always come from the documents it was fitted on.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    config: FeatureEncoderConfig,
    stop_words: HashSet<Token>,
}

impl FeatureEncoder {
    pub fn new(config: FeatureEncoderConfig) -> Self {
        let stop_words = if config.remove_stop_words {
            default_stop_words()
        } else {
            HashSet::new()
        };

        FeatureEncoder { config, stop_words }
    }

    /// Replaces the stop word list (and turns stop word removal on).
    pub fn with_stop_words(mut self, stop_words: HashSet<Token>) -> Self {
        self.config.remove_stop_words = true;
        self.stop_words = stop_words;
        self
    }

    pub fn config(&self) -> &FeatureEncoderConfig {
        &self.config
    }

    pub fn fit(&self, training_documents: &[Document]) -> Result<FittedFeatureEncoder, Error> {
        let vocabulary = Vocabulary::build(
            &self.config.tokenizer,
            training_documents,
            &self.stop_words,
            self.config.max_tokens,
        )?;

        Ok(FittedFeatureEncoder {
            tokenizer: self.config.tokenizer,
            weighting: self.config.weighting,
            idf_values: vocabulary.idf_values(),
            vocabulary,
        })
    }
}

/// A feature encoder frozen over the vocabulary of its training documents.
#[derive(Debug, Clone)]
pub struct FittedFeatureEncoder {
    tokenizer: Tokenizer,
    weighting: Weighting,
    vocabulary: Vocabulary,
    idf_values: Vec<f64>,
}

impl FittedFeatureEncoder {
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    pub fn n_features(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn apply(&self, document: &Document) -> FeatureVector {
        weigh_token_counts(
            &self.tokenizer,
            document,
            &self.vocabulary,
            self.weighting,
            &self.idf_values,
        )
    }

    /// Encodes every document in parallel; row `i` of the result is `documents[i]`.
    pub fn apply_all(&self, documents: &[Document]) -> Result<FeatureMatrix, Error> {
        info!("Encoding {} documents...", documents.len());

        let rows: Vec<FeatureVector> = documents
            .par_iter()
            .map(|document| self.apply(document))
            .collect();

        FeatureMatrix::from_rows(rows, self.n_features())
    }
}
