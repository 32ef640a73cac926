use serde::{Deserialize, Serialize};

use crate::classifiers::classifier::BinaryClassifier;
use crate::classifiers::forest::tree::DecisionTree;
use crate::error::PredictError;

/// A trained forest as serialized by the training pipeline: a fixed input
/// width plus the per-tree structure. Immutable once deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    pub n_features: usize,
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Structural check run once at load time. A forest with no trees is an
    /// untrained artifact; a split referencing a feature outside the
    /// declared width can never be evaluated.
    pub fn validate(&self) -> Result<(), PredictError> {
        if self.trees.is_empty() {
            return Err(PredictError::EmptyForest);
        }
        for tree in &self.trees {
            if let Some(index) = tree.max_feature_index()
                && index >= self.n_features
            {
                return Err(PredictError::FeatureIndexOutOfRange {
                    index,
                    width: self.n_features,
                });
            }
        }
        Ok(())
    }

    fn mean_distribution(&self, features: &[f64]) -> Result<[f64; 2], PredictError> {
        if features.len() != self.n_features {
            return Err(PredictError::FeatureCount {
                expected: self.n_features,
                actual: features.len(),
            });
        }
        if self.trees.is_empty() {
            return Err(PredictError::EmptyForest);
        }

        let mut sum = [0.0_f64; 2];
        for tree in &self.trees {
            let dist = tree.class_distribution(features)?;
            sum[0] += dist[0];
            sum[1] += dist[1];
        }
        let n = self.trees.len() as f64;
        Ok([sum[0] / n, sum[1] / n])
    }
}

impl BinaryClassifier for RandomForest {
    /// Argmax over the mean class distribution; ties resolve to the
    /// negative class, matching the original artifacts' behavior.
    fn predict(&self, features: &[f64]) -> Result<u8, PredictError> {
        let dist = self.mean_distribution(features)?;
        Ok(if dist[1] > dist[0] { 1 } else { 0 })
    }

    fn predict_probability(&self, features: &[f64]) -> Result<f64, PredictError> {
        Ok(self.mean_distribution(features)?[1])
    }

    fn num_features(&self) -> usize {
        self.n_features
    }
}
