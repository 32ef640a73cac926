mod failing_classifier;
mod fixed_classifier;

pub use failing_classifier::FailingClassifier;
pub use fixed_classifier::FixedClassifier;
