mod random_forest;
mod tree;

pub use random_forest::RandomForest;
pub use tree::{DecisionTree, TreeNode};
