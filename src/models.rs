pub mod error;
pub use error::Error;

pub mod document;
pub use document::Document;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod vocabulary;
pub use vocabulary::Vocabulary;

pub mod feature_matrix;
pub use feature_matrix::FeatureMatrix;

pub mod feature_encoder;
pub use feature_encoder::{FeatureEncoder, FeatureEncoderConfig, FittedFeatureEncoder, Weighting};

pub mod fold_split;
pub use fold_split::FoldSplit;

pub mod feature_scaling;
pub use feature_scaling::FeatureScaling;

pub mod predictor;
pub use predictor::Predictor;

pub mod linear_regressor;
pub use linear_regressor::{LinearModel, LinearRegressor, SolverConfig};

pub mod null_regressor;
pub use null_regressor::{NullModel, NullRegressor};

pub mod regression_metrics;
pub use regression_metrics::RegressionMetrics;

pub mod metric_record;
pub use metric_record::{MetricRecord, MetricsTable, ResampleResult, SelectionPolicy};

pub mod tuner;
pub use tuner::{TuneResult, Tuner, TunerConfig};

pub mod final_fit;
pub use final_fit::FinalFit;
