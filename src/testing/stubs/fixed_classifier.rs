use crate::classifiers::BinaryClassifier;
use crate::error::PredictError;

/// Always returns the same label and probability. Stands in for a trained
/// artifact when a test only cares about what happens after prediction.
pub struct FixedClassifier {
    width: usize,
    label: u8,
    probability: f64,
}

impl FixedClassifier {
    pub fn new(width: usize, label: u8, probability: f64) -> Self {
        Self {
            width,
            label,
            probability,
        }
    }
}

impl BinaryClassifier for FixedClassifier {
    fn predict(&self, features: &[f64]) -> Result<u8, PredictError> {
        if features.len() != self.width {
            return Err(PredictError::FeatureCount {
                expected: self.width,
                actual: features.len(),
            });
        }
        Ok(self.label)
    }

    fn predict_probability(&self, features: &[f64]) -> Result<f64, PredictError> {
        if features.len() != self.width {
            return Err(PredictError::FeatureCount {
                expected: self.width,
                actual: features.len(),
            });
        }
        Ok(self.probability)
    }

    fn num_features(&self) -> usize {
        self.width
    }
}
