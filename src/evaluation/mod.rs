mod confusion;
mod pr_curve;
mod report;

pub use confusion::ConfusionMatrix;
pub use pr_curve::{PrCurve, PrPoint};
pub use report::EvaluationReport;
