use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A held-out (features, labels) pair loaded once alongside its model and
/// used only for the evaluation report. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestDataset {
    pub features: Vec<Vec<f64>>,
    pub labels: Vec<u8>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("row {row} has {actual} features, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{features} feature rows but {labels} labels")]
    LengthMismatch { features: usize, labels: usize },

    #[error("row {row} has non-binary label {label}")]
    BadLabel { row: usize, label: u8 },
}

impl TestDataset {
    /// Shape check against the schema width the paired model expects.
    pub fn validate(&self, width: usize) -> Result<(), DatasetError> {
        if self.features.len() != self.labels.len() {
            return Err(DatasetError::LengthMismatch {
                features: self.features.len(),
                labels: self.labels.len(),
            });
        }
        for (row, values) in self.features.iter().enumerate() {
            if values.len() != width {
                return Err(DatasetError::RowWidth {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
        }
        for (row, &label) in self.labels.iter().enumerate() {
            if label > 1 {
                return Err(DatasetError::BadLabel { row, label });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_data() {
        let ds = TestDataset {
            features: vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            labels: vec![0, 1],
        };
        assert!(ds.validate(2).is_ok());
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn rejects_ragged_rows() {
        let ds = TestDataset {
            features: vec![vec![1.0, 2.0], vec![3.0]],
            labels: vec![0, 1],
        };
        assert_eq!(
            ds.validate(2).unwrap_err(),
            DatasetError::RowWidth {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn rejects_label_feature_length_mismatch() {
        let ds = TestDataset {
            features: vec![vec![1.0]],
            labels: vec![0, 1],
        };
        assert_eq!(
            ds.validate(1).unwrap_err(),
            DatasetError::LengthMismatch {
                features: 1,
                labels: 2
            }
        );
    }

    #[test]
    fn rejects_non_binary_labels() {
        let ds = TestDataset {
            features: vec![vec![1.0]],
            labels: vec![2],
        };
        assert_eq!(
            ds.validate(1).unwrap_err(),
            DatasetError::BadLabel { row: 0, label: 2 }
        );
    }
}
