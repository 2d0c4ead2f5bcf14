use test_utils::assert_approx_eq;
use text_regression::{evaluate, Error, RegressionMetrics};

#[cfg(test)]
mod evaluate_tests {
    use super::*;

    #[test]
    fn test_perfect_predictions() {
        let metrics = evaluate(&[3.0, 5.0, 7.0], &[3.0, 5.0, 7.0]).unwrap();

        assert_eq!(metrics.rmse, 0.0);
        assert_eq!(metrics.r_squared, 1.0);
        assert_eq!(metrics.n_observations, 3);
    }

    #[test]
    fn test_mean_predictions() {
        let metrics = evaluate(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap();

        assert_approx_eq(metrics.rmse, (2.0f64 / 3.0).sqrt(), 1e-12);
        assert_approx_eq(metrics.r_squared, 0.0, 1e-12);
    }

    #[test]
    fn test_varying_predictions_against_constant_truths() {
        let metrics = evaluate(&[1.0, 2.0, 3.0], &[2.0, 2.0, 2.0]).unwrap();

        assert_approx_eq(metrics.rmse, (2.0f64 / 3.0).sqrt(), 1e-12);
        assert!(metrics.r_squared.is_nan());
    }

    #[test]
    fn test_worse_than_mean_is_negative_r_squared() {
        let metrics = evaluate(&[3.0, 2.0, 1.0], &[1.0, 2.0, 3.0]).unwrap();

        assert_approx_eq(metrics.rmse, (8.0f64 / 3.0).sqrt(), 1e-12);
        assert_approx_eq(metrics.r_squared, -3.0, 1e-12);
    }

    #[test]
    fn test_constant_truths_have_undefined_r_squared() {
        let metrics = evaluate(&[1.0, 2.0], &[4.0, 4.0]).unwrap();

        assert_approx_eq(metrics.rmse, (13.0f64 / 2.0).sqrt(), 1e-12);
        assert!(metrics.r_squared.is_nan());
    }

    #[test]
    fn test_single_observation() {
        let metrics = evaluate(&[1.5], &[1.0]).unwrap();

        assert_eq!(metrics.rmse, 0.5);
        assert!(metrics.r_squared.is_nan());
    }

    #[test]
    fn test_no_observations() {
        let metrics = evaluate(&[], &[]).unwrap();

        assert!(metrics.rmse.is_nan());
        assert!(metrics.r_squared.is_nan());
        assert_eq!(metrics.n_observations, 0);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            evaluate(&[1.0, 2.0], &[1.0]),
            Err(Error::InvalidInputError(_))
        ));
    }

    #[test]
    fn test_strict_metrics_report_degenerate_input() {
        assert!(matches!(
            RegressionMetrics::compute_r_squared(&[1.0, 2.0], &[4.0, 4.0]),
            Err(Error::DegenerateInputError(_))
        ));
        assert!(matches!(
            RegressionMetrics::compute_rmse(&[], &[]),
            Err(Error::DegenerateInputError(_))
        ));
    }
}
