use crate::types::Label;
use crate::{Error, FeatureMatrix};

/// A model family that can be trained on a feature matrix and used for prediction.
///
/// The tuner and the resampling helpers only ever talk to this trait, so any family can be
/// swept or compared against another.
pub trait Predictor: Send + Sync {
    type Model: Send + Sync;

    fn fit(&self, features: &FeatureMatrix, labels: &[Label]) -> Result<Self::Model, Error>;

    /// Fails when `features` does not have the width the model was trained on.
    fn predict(
        &self,
        model: &Self::Model,
        features: &FeatureMatrix,
    ) -> Result<Vec<Label>, Error>;

    /// A copy of this predictor with its stopping criterion loosened by `factor`, used to retry a
    /// fit that did not converge. Families without an iterative solver return `None`.
    fn relaxed(&self, _factor: f64) -> Option<Self>
    where
        Self: Sized,
    {
        None
    }
}
