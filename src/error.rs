use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while bootstrapping the model store.
///
/// Both variants are fatal: the process refuses to serve requests with a
/// partially-loaded model set, since every screening page depends on a
/// known-good artifact.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("model artifact missing: {path}")]
    ArtifactNotFound { path: PathBuf },

    #[error("model artifact unusable: {path}: {reason}")]
    ArtifactCorrupt { path: PathBuf, reason: String },
}

/// Per-request failures. Reported to the user and discarded together with
/// the request-local state; the process stays up and other diseases remain
/// servable.
#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("missing required field '{0}'")]
    MissingField(String),

    #[error("field '{field}' is not numeric (got {value})")]
    NotNumeric { field: String, value: String },

    #[error("prediction failed: {0}")]
    PredictionFailed(#[from] PredictError),
}

/// Failures inside a classifier's inference path. Wrapped into
/// [`RequestError::PredictionFailed`] at the request boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictError {
    #[error("expected {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("tree references feature index {index} outside a {width}-wide input")]
    FeatureIndexOutOfRange { index: usize, width: usize },

    #[error("classifier holds no trained trees")]
    EmptyForest,
}
