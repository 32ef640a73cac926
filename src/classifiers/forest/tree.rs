use serde::{Deserialize, Serialize};

use crate::error::PredictError;

/// One node of a serialized decision tree. Splits route a sample left when
/// the feature value is at or below the threshold, matching the convention
/// of the training pipeline that produced the artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    Leaf {
        /// Training-sample counts per class, `[negative, positive]`.
        counts: [f64; 2],
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub root: TreeNode,
}

impl DecisionTree {
    /// Normalized class distribution at the leaf this sample routes to.
    pub fn class_distribution(&self, features: &[f64]) -> Result<[f64; 2], PredictError> {
        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let x = features.get(*feature).copied().ok_or(
                        PredictError::FeatureIndexOutOfRange {
                            index: *feature,
                            width: features.len(),
                        },
                    )?;
                    node = if x <= *threshold { left } else { right };
                }
                TreeNode::Leaf { counts } => {
                    let total = counts[0] + counts[1];
                    if total > 0.0 {
                        return Ok([counts[0] / total, counts[1] / total]);
                    }
                    // Empty leaf carries no evidence either way.
                    return Ok([0.5, 0.5]);
                }
            }
        }
    }

    /// Largest feature index referenced anywhere in the tree, if any split
    /// exists. Used by artifact validation.
    pub fn max_feature_index(&self) -> Option<usize> {
        let mut max = None;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                max = Some(max.map_or(*feature, |m: usize| m.max(*feature)));
                stack.push(left);
                stack.push(right);
            }
        }
        max
    }
}
