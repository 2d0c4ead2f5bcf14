mod config;
pub use config::{DEFAULT_FEATURE_ENCODER_CONFIG, DEFAULT_SOLVER_CONFIG, DEFAULT_TUNER_CONFIG};
pub mod constants;
pub mod models;
pub use models::{
    Document, Error, FeatureEncoder, FeatureEncoderConfig, FeatureMatrix, FeatureScaling,
    FinalFit, FittedFeatureEncoder, FoldSplit, LinearModel, LinearRegressor, MetricRecord,
    MetricsTable, NullModel, NullRegressor, Predictor, RegressionMetrics, ResampleResult,
    SelectionPolicy, SolverConfig, TuneResult, Tuner, TunerConfig, Tokenizer, Vocabulary,
    Weighting,
};
pub mod types;
pub mod utils;
pub use models::fold_split::initial_split;
pub use types::{FeatureVector, Label, Mixture, Penalty, Token, TokenId};
pub use utils::{
    default_penalty_grid, default_stop_words, penalty_grid, read_corpus_from_path,
    read_corpus_from_string,
};

use std::collections::HashSet;
use std::io::Write;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Builds a vocabulary of at most `max_tokens` word tokens from `documents`.
pub fn build_vocabulary(
    documents: &[Document],
    stop_words: &HashSet<Token>,
    max_tokens: usize,
) -> Result<Vocabulary, Error> {
    Vocabulary::build(&Tokenizer::word_parser(), documents, stop_words, max_tokens)
}

/// Encodes `document` under `vocabulary` using word tokens.
///
/// Vocabularies built from n-grams need the matching tokenizer; use a `FeatureEncoder` for those.
pub fn encode(document: &Document, vocabulary: &Vocabulary, weighting: Weighting) -> FeatureVector {
    models::feature_encoder::encode(&Tokenizer::word_parser(), document, vocabulary, weighting)
}

/// Partitions `documents` into `k` seeded cross-validation folds.
pub fn make_folds(documents: &[Document], k: usize, seed: u64) -> Result<Vec<FoldSplit>, Error> {
    FoldSplit::collect_fold_splits(documents.len(), k, seed)
}

/// Fits a lasso (`mixture = 1.0`) or elastic-net model with the default solver settings.
pub fn fit(
    features: &FeatureMatrix,
    labels: &[Label],
    penalty: Penalty,
    mixture: Mixture,
) -> Result<LinearModel, Error> {
    LinearRegressor::new(penalty, mixture, DEFAULT_SOLVER_CONFIG).fit(features, labels)
}

/// Cross-validates every penalty in `penalty_grid` over `k` folds and selects the best one.
pub fn tune(
    documents: &[Document],
    penalty_grid: &[Penalty],
    k: usize,
    seed: u64,
) -> Result<TuneResult, Error> {
    let config = TunerConfig {
        folds: k,
        seed,
        ..DEFAULT_TUNER_CONFIG
    };

    tune_with_custom_config(&config, documents, penalty_grid)
}

pub fn tune_with_custom_config(
    config: &TunerConfig,
    documents: &[Document],
    penalty_grid: &[Penalty],
) -> Result<TuneResult, Error> {
    Tuner::new(config).tune_grid(documents, penalty_grid)
}

/// Cross-validates a single predictor (for example `NullRegressor`) over the configured folds.
pub fn fit_resamples<P: Predictor>(
    config: &TunerConfig,
    documents: &[Document],
    predictor: &P,
) -> Result<MetricRecord, Error> {
    let resample_results = Tuner::new(config).fit_resamples(documents, predictor)?;

    Ok(MetricRecord::aggregate(f64::NAN, &resample_results))
}

/// Fits the final model on all training documents and scores it on the held-out test documents.
pub fn last_fit(
    config: &TunerConfig,
    train_documents: &[Document],
    test_documents: &[Document],
    penalty: Penalty,
) -> Result<FinalFit, Error> {
    FinalFit::fit(config, train_documents, test_documents, penalty)
}

/// RMSE and R² of `predictions` against `truths`.
pub fn evaluate(predictions: &[Label], truths: &[Label]) -> Result<RegressionMetrics, Error> {
    RegressionMetrics::evaluate(predictions, truths)
}

/// Writes a metrics table as CSV, one row per penalty.
pub fn write_metrics_table<W: Write>(metrics_table: &MetricsTable, writer: W) -> Result<(), Error> {
    metrics_table.write_csv(writer)
}
