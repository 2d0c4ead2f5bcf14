use crate::constants::MIN_FEATURE_VARIANCE;
use crate::FeatureMatrix;

/// Per-column centering and scaling captured from a training matrix.
///
/// Columns with (near) zero variance get a scale of `0.0` and always transform to `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureScaling {
    means: Vec<f64>,
    scales: Vec<f64>,
}

impl FeatureScaling {
    /// Learns column means and population standard deviations.
    pub fn fit(features: &FeatureMatrix) -> Self {
        let (n_rows, n_cols) = features.shape();
        let n = n_rows.max(1) as f64;

        let mut means = vec![0.0; n_cols];
        for row in features.rows() {
            for (mean, value) in means.iter_mut().zip(row) {
                *mean += value;
            }
        }
        for mean in means.iter_mut() {
            *mean /= n;
        }

        let mut variances = vec![0.0; n_cols];
        for row in features.rows() {
            for ((variance, mean), value) in variances.iter_mut().zip(&means).zip(row) {
                *variance += (value - mean).powi(2);
            }
        }

        let scales = variances
            .into_iter()
            .map(|sum_sq| {
                let variance = sum_sq / n;
                if variance < MIN_FEATURE_VARIANCE {
                    0.0
                } else {
                    variance.sqrt()
                }
            })
            .collect();

        FeatureScaling { means, scales }
    }

    pub fn n_features(&self) -> usize {
        self.means.len()
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    pub fn is_constant(&self, col: usize) -> bool {
        self.scales[col] == 0.0
    }

    pub fn transform_value(&self, col: usize, value: f64) -> f64 {
        if self.is_constant(col) {
            0.0
        } else {
            (value - self.means[col]) / self.scales[col]
        }
    }

    pub fn transform_row(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .enumerate()
            .map(|(col, &value)| self.transform_value(col, value))
            .collect()
    }

    /// Standardized copy of column `col`.
    pub fn transform_column(&self, features: &FeatureMatrix, col: usize) -> Vec<f64> {
        features
            .column(col)
            .into_iter()
            .map(|value| self.transform_value(col, value))
            .collect()
    }
}
