use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// One operating point of the curve. `threshold` is `None` only for the
/// final (precision 1, recall 0) anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrPoint {
    pub precision: f64,
    pub recall: f64,
    pub threshold: Option<f64>,
}

/// Precision-recall curve traced by sweeping the distinct probability
/// scores as thresholds, highest first, plus the trapezoidal area under it.
#[derive(Debug, Clone, PartialEq)]
pub struct PrCurve {
    pub points: Vec<PrPoint>,
    pub auc: f64,
}

impl PrCurve {
    /// `scores[i]` is the positive-class probability for sample `i`,
    /// `labels[i]` its true class. Samples tied on score fall under one
    /// threshold together.
    pub fn from_scores(scores: &[f64], labels: &[u8]) -> PrCurve {
        debug_assert_eq!(scores.len(), labels.len());

        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(Ordering::Equal)
        });

        let total_positives = labels.iter().filter(|&&l| l == 1).count() as f64;

        let mut points = Vec::new();
        let mut tp = 0.0_f64;
        let mut fp = 0.0_f64;
        let mut i = 0;
        while i < order.len() {
            let threshold = scores[order[i]];
            while i < order.len() && scores[order[i]] == threshold {
                if labels[order[i]] == 1 {
                    tp += 1.0;
                } else {
                    fp += 1.0;
                }
                i += 1;
            }
            let precision = if tp + fp > 0.0 { tp / (tp + fp) } else { 1.0 };
            let recall = if total_positives > 0.0 {
                tp / total_positives
            } else {
                0.0
            };
            points.push(PrPoint {
                precision,
                recall,
                threshold: Some(threshold),
            });
        }
        points.push(PrPoint {
            precision: 1.0,
            recall: 0.0,
            threshold: None,
        });

        let auc = trapezoid_auc(&points);
        PrCurve { points, auc }
    }
}

/// Trapezoidal integration over ascending recall. Threshold points arrive
/// recall-ascending with the zero-recall anchor last, so the anchor leads.
fn trapezoid_auc(points: &[PrPoint]) -> f64 {
    let mut ordered: Vec<&PrPoint> = points.iter().collect();
    ordered.sort_by(|a, b| a.recall.partial_cmp(&b.recall).unwrap_or(Ordering::Equal));

    let mut area = 0.0;
    for pair in ordered.windows(2) {
        let dx = pair[1].recall - pair[0].recall;
        area += dx * (pair[0].precision + pair[1].precision) / 2.0;
    }
    area
}

impl Display for PrCurve {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} points, auc={:.6}", self.points.len(), self.auc)
    }
}
