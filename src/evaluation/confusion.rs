use std::fmt::{Display, Formatter, Result as FmtResult};

/// 2x2 true-vs-predicted counts for a binary classifier. Rows are the true
/// class, columns the predicted class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionMatrix {
    pub true_negatives: u64,
    pub false_positives: u64,
    pub false_negatives: u64,
    pub true_positives: u64,
}

impl ConfusionMatrix {
    pub fn record(&mut self, truth: u8, predicted: u8) {
        match (truth, predicted) {
            (0, 0) => self.true_negatives += 1,
            (0, _) => self.false_positives += 1,
            (_, 0) => self.false_negatives += 1,
            _ => self.true_positives += 1,
        }
    }

    /// `[[TN, FP], [FN, TP]]`.
    pub fn cells(&self) -> [[u64; 2]; 2] {
        [
            [self.true_negatives, self.false_positives],
            [self.false_negatives, self.true_positives],
        ]
    }

    pub fn total(&self) -> u64 {
        self.true_negatives + self.false_positives + self.false_negatives + self.true_positives
    }

    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return f64::NAN;
        }
        (self.true_negatives + self.true_positives) as f64 / total as f64
    }
}

impl Display for ConfusionMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "tn={}, fp={}, fn={}, tp={}",
            self.true_negatives, self.false_positives, self.false_negatives, self.true_positives
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_into_the_right_cells() {
        let mut cm = ConfusionMatrix::default();
        cm.record(0, 0);
        cm.record(0, 1);
        cm.record(1, 0);
        cm.record(1, 1);
        cm.record(1, 1);
        assert_eq!(cm.cells(), [[1, 1], [1, 2]]);
        assert_eq!(cm.total(), 5);
        assert!((cm.accuracy() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn empty_matrix_has_nan_accuracy() {
        let cm = ConfusionMatrix::default();
        assert_eq!(cm.total(), 0);
        assert!(cm.accuracy().is_nan());
    }
}
