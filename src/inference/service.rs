use crate::core::disease::DiseaseKind;
use crate::core::vector::FeatureVector;
use crate::error::RequestError;
use crate::store::model_store::ModelStore;

/// Outcome of one inference request. Ephemeral: created and consumed within
/// a single request/response cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub disease: DiseaseKind,
    pub positive: bool,
    pub probability: Option<f64>,
}

impl PredictionResult {
    pub fn diagnosis(&self) -> &'static str {
        if self.positive {
            self.disease.positive_diagnosis()
        } else {
            self.disease.negative_diagnosis()
        }
    }
}

/// Stateless inference over an already-bootstrapped store. The store is an
/// explicitly passed immutable context, never ambient global state.
pub struct InferenceService<'a> {
    store: &'a ModelStore,
}

impl<'a> InferenceService<'a> {
    pub fn new(store: &'a ModelStore) -> Self {
        Self { store }
    }

    /// Binary prediction for one assembled sample. A label of 1 means the
    /// condition is present; anything else means absent.
    pub fn predict(&self, vector: &FeatureVector) -> Result<PredictionResult, RequestError> {
        let artifact = self.store.artifact(vector.disease());
        let label = artifact.classifier().predict(vector.values())?;
        Ok(PredictionResult {
            disease: vector.disease(),
            positive: label == 1,
            probability: None,
        })
    }

    /// Same as [`predict`](Self::predict), additionally reporting the
    /// positive-class probability.
    pub fn predict_with_probability(
        &self,
        vector: &FeatureVector,
    ) -> Result<PredictionResult, RequestError> {
        let artifact = self.store.artifact(vector.disease());
        let classifier = artifact.classifier();
        let label = classifier.predict(vector.values())?;
        let probability = classifier.predict_probability(vector.values())?;
        Ok(PredictionResult {
            disease: vector.disease(),
            positive: label == 1,
            probability: Some(probability),
        })
    }
}
