pub mod dataset;
pub mod model_store;

pub use dataset::{DatasetError, TestDataset};
pub use model_store::{ModelArtifact, ModelStore, PerDisease};
