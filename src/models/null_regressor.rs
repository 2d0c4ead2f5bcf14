use crate::types::Label;
use crate::{Error, FeatureMatrix, Predictor};

/// Baseline that ignores the features and always predicts the training mean.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct NullRegressor;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NullModel {
    pub mean: Label,
}

impl NullRegressor {
    pub fn new() -> Self {
        NullRegressor
    }
}

impl Predictor for NullRegressor {
    type Model = NullModel;

    fn fit(&self, features: &FeatureMatrix, labels: &[Label]) -> Result<NullModel, Error> {
        if labels.is_empty() {
            return Err(Error::InvalidInputError(
                "Cannot fit a null model without labels".to_string(),
            ));
        }

        if features.n_rows() != labels.len() {
            return Err(Error::InvalidInputError(format!(
                "Feature matrix has {} rows but {} labels were given",
                features.n_rows(),
                labels.len()
            )));
        }

        let mean = labels.iter().sum::<Label>() / labels.len() as Label;

        Ok(NullModel { mean })
    }

    fn predict(
        &self,
        model: &NullModel,
        features: &FeatureMatrix,
    ) -> Result<Vec<Label>, Error> {
        Ok(vec![model.mean; features.n_rows()])
    }
}
