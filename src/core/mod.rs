pub mod disease;
pub mod schema;
pub mod vector;

pub use disease::DiseaseKind;
pub use schema::{FeatureField, FeatureSchema};
pub use vector::FeatureVector;
