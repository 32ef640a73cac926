use crate::classifiers::BinaryClassifier;
use crate::error::PredictError;

/// Fails every call. Exercises the per-request error path without touching
/// shared state.
pub struct FailingClassifier {
    width: usize,
}

impl FailingClassifier {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl BinaryClassifier for FailingClassifier {
    fn predict(&self, _features: &[f64]) -> Result<u8, PredictError> {
        Err(PredictError::EmptyForest)
    }

    fn predict_probability(&self, _features: &[f64]) -> Result<f64, PredictError> {
        Err(PredictError::EmptyForest)
    }

    fn num_features(&self) -> usize {
        self.width
    }
}
