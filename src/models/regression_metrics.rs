use crate::types::Label;
use crate::Error;
use log::warn;

/// Held-out regression metrics for one set of predictions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RegressionMetrics {
    pub rmse: f64,
    /// `NaN` when undefined (fewer than two observations, or constant truths).
    pub r_squared: f64,
    pub n_observations: usize,
}

impl RegressionMetrics {
    /// Computes RMSE and R² for `predictions` against `truths`.
    ///
    /// Only a length mismatch is an error. An undefined R² is reported as `NaN` with a warning,
    /// and an empty input yields `NaN` for both metrics.
    pub fn evaluate(predictions: &[Label], truths: &[Label]) -> Result<Self, Error> {
        check_lengths(predictions, truths)?;

        let rmse = if truths.is_empty() {
            warn!("RMSE is undefined for zero observations; reporting NaN");
            f64::NAN
        } else {
            Self::compute_rmse(predictions, truths)?
        };

        let r_squared = match Self::compute_r_squared(predictions, truths) {
            Ok(r_squared) => r_squared,
            Err(Error::DegenerateInputError(msg)) => {
                warn!("{}; reporting NaN", msg);
                f64::NAN
            }
            Err(err) => return Err(err),
        };

        Ok(RegressionMetrics {
            rmse,
            r_squared,
            n_observations: truths.len(),
        })
    }

    /// Root mean squared error.
    pub fn compute_rmse(predictions: &[Label], truths: &[Label]) -> Result<f64, Error> {
        check_lengths(predictions, truths)?;

        if truths.is_empty() {
            return Err(Error::DegenerateInputError(
                "RMSE is undefined for zero observations".to_string(),
            ));
        }

        Ok((sum_squared_residuals(predictions, truths) / truths.len() as f64).sqrt())
    }

    /// Coefficient of determination, `1 - SSR / TSS`.
    pub fn compute_r_squared(predictions: &[Label], truths: &[Label]) -> Result<f64, Error> {
        check_lengths(predictions, truths)?;

        if truths.len() < 2 {
            return Err(Error::DegenerateInputError(format!(
                "R² is undefined for {} observation(s)",
                truths.len()
            )));
        }

        let mean = truths.iter().sum::<f64>() / truths.len() as f64;
        let total_sum_squares: f64 = truths.iter().map(|t| (t - mean).powi(2)).sum();

        if total_sum_squares == 0.0 {
            return Err(Error::DegenerateInputError(
                "R² is undefined when every true value is identical".to_string(),
            ));
        }

        Ok(1.0 - sum_squared_residuals(predictions, truths) / total_sum_squares)
    }
}

fn check_lengths(predictions: &[Label], truths: &[Label]) -> Result<(), Error> {
    if predictions.len() != truths.len() {
        return Err(Error::InvalidInputError(format!(
            "Got {} predictions for {} true values",
            predictions.len(),
            truths.len()
        )));
    }
    Ok(())
}

fn sum_squared_residuals(predictions: &[Label], truths: &[Label]) -> f64 {
    predictions
        .iter()
        .zip(truths)
        .map(|(p, t)| (p - t).powi(2))
        .sum()
}
