use test_utils::assert_approx_eq;
use text_regression::{
    write_metrics_table, MetricRecord, MetricsTable, RegressionMetrics, ResampleResult,
    SelectionPolicy,
};

fn record(penalty: f64, rmse_mean: f64, rmse_std_err: f64) -> MetricRecord {
    MetricRecord {
        penalty,
        rmse_mean,
        rmse_std_err,
        rsq_mean: 0.5,
        rsq_std_err: 0.05,
        n_ok: 5,
        n_failed: 0,
    }
}

fn cell(fold: usize, penalty: f64, rmse: f64, r_squared: f64) -> ResampleResult {
    ResampleResult {
        fold,
        penalty,
        outcome: Ok(RegressionMetrics {
            rmse,
            r_squared,
            n_observations: 10,
        }),
    }
}

#[cfg(test)]
mod aggregate_tests {
    use super::*;

    #[test]
    fn test_mean_and_standard_error() {
        let cells = [
            cell(0, 0.1, 1.0, 0.6),
            cell(1, 0.1, 2.0, 0.5),
            cell(2, 0.1, 3.0, 0.4),
        ];

        let aggregated = MetricRecord::aggregate(0.1, &cells);

        assert_eq!(aggregated.penalty, 0.1);
        assert_approx_eq(aggregated.rmse_mean, 2.0, 1e-12);
        // sample sd 1.0 over sqrt(3)
        assert_approx_eq(aggregated.rmse_std_err, 1.0 / 3f64.sqrt(), 1e-12);
        assert_approx_eq(aggregated.rsq_mean, 0.5, 1e-12);
        assert_eq!(aggregated.n_ok, 3);
        assert_eq!(aggregated.n_failed, 0);
    }

    #[test]
    fn test_failed_cells_are_counted_but_not_averaged() {
        let cells = [
            cell(0, 0.1, 1.0, 0.6),
            ResampleResult {
                fold: 1,
                penalty: 0.1,
                outcome: Err("Convergence Error: no convergence".to_string()),
            },
            cell(2, 0.1, 3.0, 0.4),
        ];

        let aggregated = MetricRecord::aggregate(0.1, &cells);

        assert_approx_eq(aggregated.rmse_mean, 2.0, 1e-12);
        assert_eq!(aggregated.n_ok, 2);
        assert_eq!(aggregated.n_failed, 1);
        assert!(cells[1].rmse().is_nan());
    }

    #[test]
    fn test_single_fold_has_no_standard_error() {
        let aggregated = MetricRecord::aggregate(0.1, &[cell(0, 0.1, 1.0, 0.6)]);

        assert_eq!(aggregated.rmse_mean, 1.0);
        assert!(aggregated.rmse_std_err.is_nan());
    }

    #[test]
    fn test_undefined_r_squared_is_skipped() {
        let cells = [cell(0, 0.1, 1.0, f64::NAN), cell(1, 0.1, 2.0, 0.5)];

        let aggregated = MetricRecord::aggregate(0.1, &cells);

        assert_eq!(aggregated.rsq_mean, 0.5);
        assert_approx_eq(aggregated.rmse_mean, 1.5, 1e-12);
    }
}

#[cfg(test)]
mod selection_tests {
    use super::*;

    fn table() -> MetricsTable {
        MetricsTable::new(vec![
            record(0.01, 1.05, 0.1),
            record(0.1, 1.0, 0.2),
            record(0.5, 1.1, 0.1),
            record(1.0, 1.3, 0.1),
            record(2.0, f64::NAN, f64::NAN),
        ])
    }

    #[test]
    fn test_best_is_lowest_rmse() {
        assert_eq!(table().select(SelectionPolicy::Best).unwrap().penalty, 0.1);
    }

    #[test]
    fn test_one_std_err_is_largest_penalty_within_one_standard_error() {
        assert_eq!(
            table().select(SelectionPolicy::OneStdErr).unwrap().penalty,
            0.5
        );
    }

    #[test]
    fn test_ties_go_to_the_smaller_penalty() {
        let table = MetricsTable::new(vec![record(0.5, 1.0, 0.1), record(0.2, 1.0, 0.1)]);

        assert_eq!(table.select(SelectionPolicy::Best).unwrap().penalty, 0.2);
    }

    #[test]
    fn test_nothing_usable() {
        let table = MetricsTable::new(vec![record(0.5, f64::NAN, f64::NAN)]);

        assert!(table.select(SelectionPolicy::Best).is_none());
        assert!(MetricsTable::default()
            .select(SelectionPolicy::OneStdErr)
            .is_none());
    }

    #[test]
    fn test_lookup_by_penalty() {
        let table = table();

        assert_eq!(table.len(), 5);
        assert_eq!(table.get(0.5).unwrap().rmse_mean, 1.1);
        assert!(table.get(0.3).is_none());
    }
}

#[cfg(test)]
mod write_metrics_table_tests {
    use super::*;

    #[test]
    fn test_writes_header_and_one_row_per_penalty() {
        let table = MetricsTable::new(vec![record(0.1, 1.0, 0.2), record(0.5, 1.1, 0.1)]);
        let mut buffer = Vec::new();

        write_metrics_table(&table, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[0],
            "penalty,rmse_mean,rmse_std_err,rsq_mean,rsq_std_err,n_ok,n_failed"
        );
        assert_eq!(lines[1], "0.1,1,0.2,0.5,0.05,5,0");
        assert_eq!(lines[2], "0.5,1.1,0.1,0.5,0.05,5,0");
        assert_eq!(lines.len(), 3);
    }
}
