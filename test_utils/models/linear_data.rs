use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use text_regression::FeatureMatrix;

/// Dense features drawn uniformly from `[0, 1)` with labels `intercept + X * coefficients`.
pub struct LinearData {
    pub features: FeatureMatrix,
    pub labels: Vec<f64>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearData {
    pub fn generate(
        n_rows: usize,
        coefficients: &[f64],
        intercept: f64,
        noise: f64,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let n_cols = coefficients.len();

        let mut values = Vec::with_capacity(n_rows * n_cols);
        let mut labels = Vec::with_capacity(n_rows);

        for _ in 0..n_rows {
            let row: Vec<f64> = (0..n_cols).map(|_| rng.gen::<f64>()).collect();

            let jitter = if noise > 0.0 {
                rng.gen_range(-noise..noise)
            } else {
                0.0
            };

            labels.push(
                intercept
                    + row
                        .iter()
                        .zip(coefficients)
                        .map(|(x, b)| x * b)
                        .sum::<f64>()
                    + jitter,
            );
            values.extend(row);
        }

        LinearData {
            features: FeatureMatrix::from_vec(n_rows, n_cols, values)
                .expect("generated values match the shape"),
            labels,
            coefficients: coefficients.to_vec(),
            intercept,
        }
    }
}
