pub mod classifier;
pub mod forest;

pub use classifier::BinaryClassifier;
pub use forest::{DecisionTree, RandomForest, TreeNode};
