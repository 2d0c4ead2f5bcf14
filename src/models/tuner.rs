use crate::models::document::labels_of;
use crate::types::{FoldIndex, Label, Mixture, Penalty};
use crate::{
    Document, Error, FeatureEncoder, FeatureEncoderConfig, FeatureMatrix, FoldSplit,
    LinearRegressor, MetricRecord, MetricsTable, Predictor, RegressionMetrics, ResampleResult,
    SelectionPolicy, SolverConfig,
};
use log::{debug, info, warn};
use rayon::prelude::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TunerConfig {
    pub folds: usize,
    pub seed: u64,
    pub encoder: FeatureEncoderConfig,
    pub solver: SolverConfig,
    pub mixture: Mixture,
    pub selection_policy: SelectionPolicy,
    /// Tolerance multiplier for the single retry of a fit that did not converge.
    pub relaxed_tolerance_factor: f64,
}

#[derive(Debug, Clone)]
pub struct TuneResult {
    pub best_penalty: Penalty,
    pub metrics_table: MetricsTable,
    pub resample_results: Vec<ResampleResult>,
}

/// A fold with its encoder fitted on the fold's training documents only.
struct PreparedFold {
    fold: FoldIndex,
    train_features: FeatureMatrix,
    train_labels: Vec<Label>,
    validation_features: FeatureMatrix,
    validation_labels: Vec<Label>,
}

pub struct Tuner<'a> {
    config: &'a TunerConfig,
}

impl<'a> Tuner<'a> {
    pub fn new(config: &'a TunerConfig) -> Self {
        Tuner { config }
    }

    /// Sweeps `penalty_grid` with the lasso / elastic-net solver described by the config.
    pub fn tune_grid(
        &self,
        documents: &[Document],
        penalty_grid: &[Penalty],
    ) -> Result<TuneResult, Error> {
        let mixture = self.config.mixture;
        let solver = self.config.solver;

        self.tune_grid_with(documents, penalty_grid, |penalty| {
            LinearRegressor::new(penalty, mixture, solver)
        })
    }

    /// Sweeps `penalty_grid`, building the predictor for each penalty with `make_predictor`.
    ///
    /// Every (fold, penalty) cell is fitted independently in parallel. Recoverable failures are
    /// recorded in the cell and do not stop the sweep; structural problems with the corpus
    /// (too few documents, empty vocabulary) abort it.
    pub fn tune_grid_with<P, F>(
        &self,
        documents: &[Document],
        penalty_grid: &[Penalty],
        make_predictor: F,
    ) -> Result<TuneResult, Error>
    where
        P: Predictor,
        F: Fn(Penalty) -> P + Sync,
    {
        validate_penalty_grid(penalty_grid)?;

        let prepared_folds = self.prepare_folds(documents)?;

        info!(
            "Fitting {} penalties across {} folds...",
            penalty_grid.len(),
            prepared_folds.len()
        );

        let cells: Vec<(&PreparedFold, Penalty)> = prepared_folds
            .iter()
            .flat_map(|fold| penalty_grid.iter().map(move |&penalty| (fold, penalty)))
            .collect();

        let resample_results: Vec<ResampleResult> = cells
            .par_iter()
            .map(|&(fold, penalty)| {
                let predictor = make_predictor(penalty);

                let outcome = match self.fit_and_evaluate(&predictor, fold) {
                    Ok(metrics) => Ok(metrics),
                    Err(err) if err.is_recoverable() => {
                        warn!("Fold {} failed at penalty {}: {}", fold.fold, penalty, err);
                        Err(err.to_string())
                    }
                    Err(err) => return Err(err),
                };

                Ok(ResampleResult {
                    fold: fold.fold,
                    penalty,
                    outcome,
                })
            })
            .collect::<Result<_, Error>>()?;

        let records: Vec<MetricRecord> = penalty_grid
            .iter()
            .map(|&penalty| {
                MetricRecord::aggregate(
                    penalty,
                    resample_results
                        .iter()
                        .filter(|result| result.penalty == penalty),
                )
            })
            .collect();

        let metrics_table = MetricsTable::new(records);

        let best_penalty = metrics_table
            .select(self.config.selection_policy)
            .map(|record| record.penalty)
            .ok_or_else(|| {
                Error::ConvergenceError(
                    "No penalty in the grid produced a usable fit on any fold".to_string(),
                )
            })?;

        info!("Selected penalty {}", best_penalty);

        Ok(TuneResult {
            best_penalty,
            metrics_table,
            resample_results,
        })
    }

    /// Evaluates a single predictor over the configured folds.
    ///
    /// The predictor has no penalty of its own, so the results carry `NaN` in that field.
    pub fn fit_resamples<P: Predictor>(
        &self,
        documents: &[Document],
        predictor: &P,
    ) -> Result<Vec<ResampleResult>, Error> {
        let prepared_folds = self.prepare_folds(documents)?;

        prepared_folds
            .par_iter()
            .map(|fold| {
                let outcome = match self.fit_and_evaluate(predictor, fold) {
                    Ok(metrics) => Ok(metrics),
                    Err(err) if err.is_recoverable() => {
                        warn!("Fold {} failed: {}", fold.fold, err);
                        Err(err.to_string())
                    }
                    Err(err) => return Err(err),
                };

                Ok(ResampleResult {
                    fold: fold.fold,
                    penalty: f64::NAN,
                    outcome,
                })
            })
            .collect()
    }

    fn prepare_folds(&self, documents: &[Document]) -> Result<Vec<PreparedFold>, Error> {
        let fold_splits =
            FoldSplit::collect_fold_splits(documents.len(), self.config.folds, self.config.seed)?;

        info!("Preparing {} folds...", fold_splits.len());

        let encoder = FeatureEncoder::new(self.config.encoder);

        fold_splits
            .par_iter()
            .map(|fold_split| {
                let train_documents = fold_split.training_documents(documents);
                let validation_documents = fold_split.validation_documents(documents);

                let fitted_encoder = encoder.fit(&train_documents)?;

                debug!(
                    "Fold {}: {} training / {} validation documents, {} features",
                    fold_split.fold,
                    train_documents.len(),
                    validation_documents.len(),
                    fitted_encoder.n_features()
                );

                Ok(PreparedFold {
                    fold: fold_split.fold,
                    train_features: fitted_encoder.apply_all(&train_documents)?,
                    train_labels: labels_of(&train_documents),
                    validation_features: fitted_encoder.apply_all(&validation_documents)?,
                    validation_labels: labels_of(&validation_documents),
                })
            })
            .collect()
    }

    fn fit_and_evaluate<P: Predictor>(
        &self,
        predictor: &P,
        fold: &PreparedFold,
    ) -> Result<RegressionMetrics, Error> {
        match predictor.fit(&fold.train_features, &fold.train_labels) {
            Ok(model) => evaluate_on_fold(predictor, &model, fold),
            Err(Error::ConvergenceError(msg)) => {
                match predictor.relaxed(self.config.relaxed_tolerance_factor) {
                    Some(relaxed) => {
                        debug!("Fold {}: retrying with relaxed tolerance ({})", fold.fold, msg);

                        let model = relaxed.fit(&fold.train_features, &fold.train_labels)?;
                        evaluate_on_fold(&relaxed, &model, fold)
                    }
                    None => Err(Error::ConvergenceError(msg)),
                }
            }
            Err(err) => Err(err),
        }
    }
}

fn evaluate_on_fold<P: Predictor>(
    predictor: &P,
    model: &P::Model,
    fold: &PreparedFold,
) -> Result<RegressionMetrics, Error> {
    let predictions = predictor.predict(model, &fold.validation_features)?;

    RegressionMetrics::evaluate(&predictions, &fold.validation_labels)
}

fn validate_penalty_grid(penalty_grid: &[Penalty]) -> Result<(), Error> {
    if penalty_grid.is_empty() {
        return Err(Error::InvalidInputError(
            "Penalty grid cannot be empty".to_string(),
        ));
    }

    if let Some(penalty) = penalty_grid
        .iter()
        .find(|penalty| !penalty.is_finite() || **penalty < 0.0)
    {
        return Err(Error::InvalidInputError(format!(
            "Penalty grid values must be finite and non-negative, got {}",
            penalty
        )));
    }

    // Metric records are keyed by penalty
    for (i, penalty) in penalty_grid.iter().enumerate() {
        if penalty_grid[..i].contains(penalty) {
            return Err(Error::InvalidInputError(format!(
                "Penalty grid contains {} more than once",
                penalty
            )));
        }
    }

    Ok(())
}
