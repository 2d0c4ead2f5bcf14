pub mod constants;
pub mod models;
pub use models::{LinearData, SyntheticCorpus};

use text_regression::FeatureMatrix;

/// Ordinary least squares through the normal equations on centered data.
///
/// Returns `(coefficients, intercept)`. Only meant for small, well-conditioned test problems.
pub fn ordinary_least_squares(features: &FeatureMatrix, labels: &[f64]) -> (Vec<f64>, f64) {
    let (n_rows, n_cols) = features.shape();
    let n = n_rows as f64;

    let means: Vec<f64> = (0..n_cols)
        .map(|col| features.column(col).iter().sum::<f64>() / n)
        .collect();
    let label_mean = labels.iter().sum::<f64>() / n;

    // Augmented system [X'X | X'y]
    let mut system = vec![vec![0.0; n_cols + 1]; n_cols];

    for (row, label) in features.rows().zip(labels) {
        let centered: Vec<f64> = row.iter().zip(&means).map(|(x, m)| x - m).collect();

        for i in 0..n_cols {
            for j in 0..n_cols {
                system[i][j] += centered[i] * centered[j];
            }
            system[i][n_cols] += centered[i] * (label - label_mean);
        }
    }

    // Gaussian elimination with partial pivoting
    for pivot in 0..n_cols {
        let best = (pivot..n_cols)
            .max_by(|&a, &b| system[a][pivot].abs().total_cmp(&system[b][pivot].abs()))
            .unwrap();
        system.swap(pivot, best);

        for row in (pivot + 1)..n_cols {
            let factor = system[row][pivot] / system[pivot][pivot];
            for col in pivot..=n_cols {
                system[row][col] -= factor * system[pivot][col];
            }
        }
    }

    let mut coefficients = vec![0.0; n_cols];
    for row in (0..n_cols).rev() {
        let tail: f64 = ((row + 1)..n_cols)
            .map(|col| system[row][col] * coefficients[col])
            .sum();
        coefficients[row] = (system[row][n_cols] - tail) / system[row][row];
    }

    let intercept = label_mean
        - coefficients
            .iter()
            .zip(&means)
            .map(|(b, m)| b * m)
            .sum::<f64>();

    (coefficients, intercept)
}

pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {} to be within {} of {}",
        actual,
        tolerance,
        expected
    );
}
