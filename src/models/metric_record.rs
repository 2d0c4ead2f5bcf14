use crate::types::{FoldIndex, Penalty};
use crate::utils::mean_and_std_err;
use crate::{Error, RegressionMetrics};
use std::io::Write;

/// Outcome of fitting and evaluating one (fold, penalty) cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ResampleResult {
    pub fold: FoldIndex,
    pub penalty: Penalty,
    /// `Err` holds the message of the recoverable failure that sank this cell.
    pub outcome: Result<RegressionMetrics, String>,
}

impl ResampleResult {
    pub fn rmse(&self) -> f64 {
        self.outcome.as_ref().map_or(f64::NAN, |metrics| metrics.rmse)
    }

    pub fn r_squared(&self) -> f64 {
        self.outcome
            .as_ref()
            .map_or(f64::NAN, |metrics| metrics.r_squared)
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Performance of one penalty value aggregated across folds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MetricRecord {
    pub penalty: Penalty,
    pub rmse_mean: f64,
    pub rmse_std_err: f64,
    pub rsq_mean: f64,
    pub rsq_std_err: f64,
    pub n_ok: usize,
    pub n_failed: usize,
}

impl MetricRecord {
    /// Aggregates the cells of a single penalty. Failed cells only count towards `n_failed`.
    pub fn aggregate<'a, I>(penalty: Penalty, results: I) -> Self
    where
        I: IntoIterator<Item = &'a ResampleResult>,
    {
        let mut rmse_values = vec![];
        let mut rsq_values = vec![];
        let mut n_failed = 0;

        for result in results {
            if result.is_ok() {
                rmse_values.push(result.rmse());
                rsq_values.push(result.r_squared());
            } else {
                n_failed += 1;
            }
        }

        let (rmse_mean, rmse_std_err) = mean_and_std_err(&rmse_values);
        let (rsq_mean, rsq_std_err) = mean_and_std_err(&rsq_values);

        MetricRecord {
            penalty,
            rmse_mean,
            rmse_std_err,
            rsq_mean,
            rsq_std_err,
            n_ok: rmse_values.len(),
            n_failed,
        }
    }

    fn has_usable_rmse(&self) -> bool {
        self.rmse_mean.is_finite()
    }
}

/// How the winning penalty is chosen from a `MetricsTable`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Lowest mean RMSE; ties go to the smaller penalty.
    Best,
    /// Largest penalty whose mean RMSE is within one standard error of the best.
    OneStdErr,
}

/// One `MetricRecord` per penalty, in grid order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricsTable {
    records: Vec<MetricRecord>,
}

impl MetricsTable {
    pub fn new(records: Vec<MetricRecord>) -> Self {
        MetricsTable { records }
    }

    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, penalty: Penalty) -> Option<&MetricRecord> {
        self.records.iter().find(|record| record.penalty == penalty)
    }

    /// Picks a record according to `policy`, ignoring penalties without a usable RMSE.
    pub fn select(&self, policy: SelectionPolicy) -> Option<&MetricRecord> {
        let best = self
            .records
            .iter()
            .filter(|record| record.has_usable_rmse())
            .min_by(|a, b| {
                a.rmse_mean
                    .total_cmp(&b.rmse_mean)
                    .then_with(|| a.penalty.total_cmp(&b.penalty))
            })?;

        match policy {
            SelectionPolicy::Best => Some(best),
            SelectionPolicy::OneStdErr => {
                let std_err = if best.rmse_std_err.is_finite() {
                    best.rmse_std_err
                } else {
                    0.0
                };
                let ceiling = best.rmse_mean + std_err;

                self.records
                    .iter()
                    .filter(|record| record.has_usable_rmse() && record.rmse_mean <= ceiling)
                    .max_by(|a, b| a.penalty.total_cmp(&b.penalty))
            }
        }
    }

    /// Writes the table as CSV with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "penalty",
            "rmse_mean",
            "rmse_std_err",
            "rsq_mean",
            "rsq_std_err",
            "n_ok",
            "n_failed",
        ])?;

        for record in &self.records {
            csv_writer.write_record([
                record.penalty.to_string(),
                record.rmse_mean.to_string(),
                record.rmse_std_err.to_string(),
                record.rsq_mean.to_string(),
                record.rsq_std_err.to_string(),
                record.n_ok.to_string(),
                record.n_failed.to_string(),
            ])?;
        }

        csv_writer.flush()?;

        Ok(())
    }
}
