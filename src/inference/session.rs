use serde_json::{Map, Value};

use crate::core::disease::DiseaseKind;
use crate::core::schema::FeatureSchema;
use crate::core::vector::FeatureVector;
use crate::error::RequestError;
use crate::evaluation::EvaluationReport;
use crate::inference::service::{InferenceService, PredictionResult};
use crate::store::model_store::ModelStore;

/// The request surface the presentation layer talks to: one generic
/// collect-assemble-predict pipeline keyed by disease, instead of a
/// copy per disease. Evaluation is offered uniformly for all three.
pub struct ScreeningSession<'a> {
    store: &'a ModelStore,
}

impl<'a> ScreeningSession<'a> {
    pub fn new(store: &'a ModelStore) -> Self {
        Self { store }
    }

    pub fn schema(&self, kind: DiseaseKind) -> &'static FeatureSchema {
        FeatureSchema::for_disease(kind)
    }

    pub fn predict(
        &self,
        kind: DiseaseKind,
        raw: &Map<String, Value>,
    ) -> Result<PredictionResult, RequestError> {
        let vector = FeatureVector::assemble(self.schema(kind), raw)?;
        InferenceService::new(self.store).predict(&vector)
    }

    pub fn predict_with_probability(
        &self,
        kind: DiseaseKind,
        raw: &Map<String, Value>,
    ) -> Result<PredictionResult, RequestError> {
        let vector = FeatureVector::assemble(self.schema(kind), raw)?;
        InferenceService::new(self.store).predict_with_probability(&vector)
    }

    pub fn evaluate(&self, kind: DiseaseKind) -> Result<EvaluationReport, RequestError> {
        EvaluationReport::compute(self.store.artifact(kind), self.store.test_data(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::step_store;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn pipeline_runs_end_to_end_for_every_disease() {
        let store = step_store();
        let session = ScreeningSession::new(&store);

        for kind in DiseaseKind::iter() {
            let mut raw = Map::new();
            for field in session.schema(kind).fields {
                raw.insert(field.name.to_string(), json!(1));
            }
            let result = session.predict(kind, &raw).unwrap();
            assert_eq!(result.disease, kind);
            assert!(result.positive);
        }
    }

    #[test]
    fn assembly_errors_pass_through() {
        let store = step_store();
        let session = ScreeningSession::new(&store);

        let err = session
            .predict(DiseaseKind::Diabetes, &Map::new())
            .unwrap_err();
        assert_eq!(err, RequestError::MissingField("Pregnancies".to_string()));
    }

    #[test]
    fn evaluation_is_available_for_every_disease() {
        let store = step_store();
        let session = ScreeningSession::new(&store);

        for kind in DiseaseKind::iter() {
            let report = session.evaluate(kind).unwrap();
            assert_eq!(report.disease, kind);
            assert!(report.confusion.total() > 0);
        }
    }
}
