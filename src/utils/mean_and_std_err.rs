/// Mean and standard error (sample standard deviation over `sqrt(n)`) of the finite values.
///
/// Non-finite values are skipped. With no finite values both results are `NaN`; with a single
/// one the standard error is `NaN`.
pub fn mean_and_std_err(values: &[f64]) -> (f64, f64) {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let n = finite.len();

    if n == 0 {
        return (f64::NAN, f64::NAN);
    }

    let mean = finite.iter().sum::<f64>() / n as f64;

    if n == 1 {
        return (mean, f64::NAN);
    }

    let variance = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

    (mean, (variance / n as f64).sqrt())
}
