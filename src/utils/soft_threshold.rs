/// Soft-thresholding operator, `sign(value) * max(|value| - threshold, 0)`.
///
/// This is the proximal operator of the L1 norm and is what drives lasso coefficients to exactly
/// zero.
pub fn soft_threshold(value: f64, threshold: f64) -> f64 {
    if value > threshold {
        value - threshold
    } else if value < -threshold {
        value + threshold
    } else {
        0.0
    }
}
