use crate::constants::{DEFAULT_FOLD_COUNT, DEFAULT_MAX_TOKENS, DEFAULT_SEED};
use crate::models::{FeatureEncoderConfig, SelectionPolicy, SolverConfig, TunerConfig, Weighting};
use crate::Tokenizer;

pub const DEFAULT_FEATURE_ENCODER_CONFIG: FeatureEncoderConfig = FeatureEncoderConfig {
    tokenizer: Tokenizer::word_parser(),
    max_tokens: DEFAULT_MAX_TOKENS,
    weighting: Weighting::TfIdf,
    remove_stop_words: true,
};

pub const DEFAULT_SOLVER_CONFIG: SolverConfig = SolverConfig {
    max_iterations: 10_000,
    tolerance: 1e-7,
    timeout: None,
};

pub const DEFAULT_TUNER_CONFIG: TunerConfig = TunerConfig {
    folds: DEFAULT_FOLD_COUNT,
    seed: DEFAULT_SEED,
    encoder: DEFAULT_FEATURE_ENCODER_CONFIG,
    solver: DEFAULT_SOLVER_CONFIG,
    mixture: 1.0,
    selection_policy: SelectionPolicy::Best,
    relaxed_tolerance_factor: 100.0,
};
