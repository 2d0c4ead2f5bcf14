use crate::models::document::labels_of;
use crate::types::{Label, Penalty};
use crate::{
    Document, Error, FeatureEncoder, FittedFeatureEncoder, LinearModel, LinearRegressor,
    Predictor, RegressionMetrics, SolverConfig, TunerConfig,
};
use log::{info, warn};

/// A model trained on the full training split together with the encoder it was trained under,
/// and its performance on the held-out test split.
#[derive(Debug, Clone)]
pub struct FinalFit {
    encoder: FittedFeatureEncoder,
    model: LinearModel,
    test_predictions: Vec<Label>,
    test_metrics: RegressionMetrics,
}

impl FinalFit {
    /// Fits the encoder and the solver once on `train_documents`, then scores `test_documents`.
    pub fn fit(
        config: &TunerConfig,
        train_documents: &[Document],
        test_documents: &[Document],
        penalty: Penalty,
    ) -> Result<Self, Error> {
        info!(
            "Final fit at penalty {} on {} training documents...",
            penalty,
            train_documents.len()
        );

        let encoder = FeatureEncoder::new(config.encoder).fit(train_documents)?;

        let train_features = encoder.apply_all(train_documents)?;
        let train_labels = labels_of(train_documents);
        let regressor = LinearRegressor::new(penalty, config.mixture, config.solver);

        let model = match regressor.fit(&train_features, &train_labels) {
            Err(Error::ConvergenceError(msg)) => {
                warn!("Final fit did not converge ({}); retrying with relaxed tolerance", msg);

                let relaxed = SolverConfig {
                    tolerance: config.solver.tolerance * config.relaxed_tolerance_factor,
                    ..config.solver
                };
                LinearRegressor::new(penalty, config.mixture, relaxed)
                    .fit(&train_features, &train_labels)?
            }
            result => result?,
        };

        let test_features = encoder.apply_all(test_documents)?;
        let test_predictions = model.predict(&test_features)?;
        let test_metrics =
            RegressionMetrics::evaluate(&test_predictions, &labels_of(test_documents))?;

        info!(
            "Test RMSE {:.4}, R² {:.4} ({} non-zero coefficients)",
            test_metrics.rmse,
            test_metrics.r_squared,
            model.n_nonzero()
        );

        Ok(FinalFit {
            encoder,
            model,
            test_predictions,
            test_metrics,
        })
    }

    /// Predicts new documents through the same encoder the model was trained with.
    pub fn predict(&self, documents: &[Document]) -> Result<Vec<Label>, Error> {
        let features = self.encoder.apply_all(documents)?;
        self.model.predict(&features)
    }

    pub fn encoder(&self) -> &FittedFeatureEncoder {
        &self.encoder
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    pub fn test_predictions(&self) -> &[Label] {
        &self.test_predictions
    }

    pub fn test_metrics(&self) -> &RegressionMetrics {
        &self.test_metrics
    }

    /// Vocabulary tokens paired with their coefficients, largest magnitude first, zeros dropped.
    pub fn top_terms(&self, n: usize) -> Vec<(&str, f64)> {
        let mut terms: Vec<(&str, f64)> = self
            .encoder
            .vocabulary()
            .tokens()
            .iter()
            .zip(self.model.coefficients())
            .filter(|(_, coefficient)| **coefficient != 0.0)
            .map(|(token, &coefficient)| (token.as_str(), coefficient))
            .collect();

        terms.sort_by(|a, b| {
            b.1.abs()
                .total_cmp(&a.1.abs())
                .then_with(|| a.0.cmp(b.0))
        });
        terms.truncate(n);

        terms
    }
}
