mod service;
mod session;

pub use service::{InferenceService, PredictionResult};
pub use session::ScreeningSession;
