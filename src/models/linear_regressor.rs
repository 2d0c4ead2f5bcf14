use crate::types::{Label, Mixture, Penalty};
use crate::utils::soft_threshold;
use crate::{Error, FeatureMatrix, FeatureScaling, Predictor};
use log::debug;
use std::time::{Duration, Instant};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverConfig {
    /// Cap on full coordinate sweeps.
    pub max_iterations: usize,
    /// Largest coefficient change (in label standard deviations) that counts as converged.
    pub tolerance: f64,
    /// Wall-clock budget for a single fit.
    pub timeout: Option<Duration>,
}

/// Lasso / elastic-net regression fitted by cyclic coordinate descent.
///
/// Minimizes
///
/// ```text
/// (1 / 2n) * ||y - b0 - Z b||^2 + penalty * (mixture * ||b||_1 + (1 - mixture) / 2 * ||b||_2^2)
/// ```
///
/// where `Z` is the feature matrix standardized column-wise. `mixture = 1.0` is the lasso,
/// `penalty = 0.0` is ordinary least squares.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearRegressor {
    penalty: Penalty,
    mixture: Mixture,
    config: SolverConfig,
}

/// A fitted linear model. Coefficient `i` belongs to feature column `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    penalty: Penalty,
    mixture: Mixture,
    scaling: FeatureScaling,
    label_mean: Label,
    standardized_coefficients: Vec<f64>,
    coefficients: Vec<f64>,
    intercept: f64,
    iterations: usize,
}

impl LinearRegressor {
    pub fn new(penalty: Penalty, mixture: Mixture, config: SolverConfig) -> Self {
        LinearRegressor {
            penalty,
            mixture,
            config,
        }
    }

    pub fn penalty(&self) -> Penalty {
        self.penalty
    }

    pub fn mixture(&self) -> Mixture {
        self.mixture
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn validate(&self, features: &FeatureMatrix, labels: &[Label]) -> Result<(), Error> {
        if !self.penalty.is_finite() || self.penalty < 0.0 {
            return Err(Error::InvalidInputError(format!(
                "Penalty must be a finite, non-negative number, got {}",
                self.penalty
            )));
        }

        if !(0.0..=1.0).contains(&self.mixture) {
            return Err(Error::InvalidInputError(format!(
                "Mixture must be within [0, 1], got {}",
                self.mixture
            )));
        }

        if features.n_rows() != labels.len() {
            return Err(Error::InvalidInputError(format!(
                "Feature matrix has {} rows but {} labels were given",
                features.n_rows(),
                labels.len()
            )));
        }

        if labels.is_empty() {
            return Err(Error::InvalidInputError(
                "Cannot fit with zero samples".to_string(),
            ));
        }

        if labels.iter().any(|label| !label.is_finite()) {
            return Err(Error::InvalidInputError(
                "Labels must be finite".to_string(),
            ));
        }

        if let Some(row) = features
            .rows()
            .position(|row| row.iter().any(|value| !value.is_finite()))
        {
            return Err(Error::InvalidInputError(format!(
                "Feature row {} holds a non-finite value",
                row
            )));
        }

        Ok(())
    }
}

impl Predictor for LinearRegressor {
    type Model = LinearModel;

    fn fit(&self, features: &FeatureMatrix, labels: &[Label]) -> Result<LinearModel, Error> {
        self.validate(features, labels)?;

        let started_at = Instant::now();
        let (n_samples, n_features) = features.shape();
        let n = n_samples as f64;

        let scaling = FeatureScaling::fit(features);

        let label_mean = labels.iter().sum::<f64>() / n;
        let mut residuals: Vec<f64> = labels.iter().map(|label| label - label_mean).collect();

        let label_std = (residuals.iter().map(|r| r * r).sum::<f64>() / n).sqrt();
        let threshold = self.config.tolerance * if label_std > 0.0 { label_std } else { 1.0 };

        // Standardized columns; constant columns stay out of the sweep and keep a zero weight
        let columns: Vec<Option<Vec<f64>>> = (0..n_features)
            .map(|col| {
                if scaling.is_constant(col) {
                    None
                } else {
                    Some(scaling.transform_column(features, col))
                }
            })
            .collect();

        let l1_penalty = self.penalty * self.mixture;
        let l2_shrinkage = 1.0 + self.penalty * (1.0 - self.mixture);

        let mut beta = vec![0.0; n_features];
        let mut iterations = 0;
        let mut converged = n_features == 0;

        while !converged {
            if iterations >= self.config.max_iterations {
                return Err(Error::ConvergenceError(format!(
                    "No convergence after {} sweeps (penalty = {}, mixture = {})",
                    iterations, self.penalty, self.mixture
                )));
            }

            iterations += 1;
            let mut max_change = 0.0f64;

            for (j, column) in columns.iter().enumerate() {
                let Some(column) = column else {
                    continue;
                };

                // Each standardized column has (1/n) * ||z_j||^2 == 1
                let rho = column
                    .iter()
                    .zip(&residuals)
                    .map(|(z, r)| z * r)
                    .sum::<f64>()
                    / n
                    + beta[j];

                let updated = soft_threshold(rho, l1_penalty) / l2_shrinkage;
                let delta = updated - beta[j];

                if delta != 0.0 {
                    for (r, z) in residuals.iter_mut().zip(column) {
                        *r -= z * delta;
                    }
                    beta[j] = updated;
                    max_change = max_change.max(delta.abs());
                }
            }

            converged = max_change < threshold;

            if !converged {
                if let Some(timeout) = self.config.timeout {
                    if started_at.elapsed() >= timeout {
                        return Err(Error::ConvergenceError(format!(
                            "Fit exceeded its {:?} budget after {} sweeps (penalty = {})",
                            timeout, iterations, self.penalty
                        )));
                    }
                }
            }
        }

        debug!(
            "Fit converged after {} sweeps (penalty = {}, mixture = {})",
            iterations, self.penalty, self.mixture
        );

        let coefficients: Vec<f64> = beta
            .iter()
            .zip(scaling.scales())
            .map(|(b, &scale)| if scale == 0.0 { 0.0 } else { b / scale })
            .collect();

        let intercept = label_mean
            - coefficients
                .iter()
                .zip(scaling.means())
                .map(|(b, mean)| b * mean)
                .sum::<f64>();

        Ok(LinearModel {
            penalty: self.penalty,
            mixture: self.mixture,
            scaling,
            label_mean,
            standardized_coefficients: beta,
            coefficients,
            intercept,
            iterations,
        })
    }

    fn predict(
        &self,
        model: &LinearModel,
        features: &FeatureMatrix,
    ) -> Result<Vec<Label>, Error> {
        model.predict(features)
    }

    fn relaxed(&self, factor: f64) -> Option<Self> {
        let mut relaxed = *self;
        relaxed.config.tolerance *= factor;
        Some(relaxed)
    }
}

impl LinearModel {
    /// Predicts one row by applying the training-time standardization, then the fitted weights.
    pub fn predict_one(&self, row: &[f64]) -> Result<Label, Error> {
        self.check_width(row.len())?;

        Ok(self.label_mean
            + self
                .scaling
                .transform_row(row)
                .iter()
                .zip(&self.standardized_coefficients)
                .map(|(z, b)| z * b)
                .sum::<f64>())
    }

    pub fn predict(&self, features: &FeatureMatrix) -> Result<Vec<Label>, Error> {
        self.check_width(features.n_cols())?;

        features.rows().map(|row| self.predict_one(row)).collect()
    }

    fn check_width(&self, n_cols: usize) -> Result<(), Error> {
        if n_cols != self.n_features() {
            return Err(Error::InvalidInputError(format!(
                "Model was trained on {} features but got {}",
                self.n_features(),
                n_cols
            )));
        }
        Ok(())
    }

    pub fn penalty(&self) -> Penalty {
        self.penalty
    }

    pub fn mixture(&self) -> Mixture {
        self.mixture
    }

    /// Weights on the original (unstandardized) feature scale.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Weights on the standardized feature scale, comparable across features.
    pub fn standardized_coefficients(&self) -> &[f64] {
        &self.standardized_coefficients
    }

    /// Intercept on the original feature scale.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn scaling(&self) -> &FeatureScaling {
        &self.scaling
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Number of coefficients that are not exactly zero.
    pub fn n_nonzero(&self) -> usize {
        self.coefficients.iter().filter(|&&b| b != 0.0).count()
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}
