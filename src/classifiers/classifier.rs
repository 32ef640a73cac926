use crate::error::PredictError;

/// The capability a loaded model artifact must expose.
///
/// `predict` returns the binary label (1 = condition present); the
/// probability variant returns the mass assigned to the positive class.
/// The decision threshold is internal to the trained model and is not
/// re-derived here.
pub trait BinaryClassifier {
    fn predict(&self, features: &[f64]) -> Result<u8, PredictError>;

    fn predict_probability(&self, features: &[f64]) -> Result<f64, PredictError>;

    fn num_features(&self) -> usize;
}
