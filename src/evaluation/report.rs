use crate::core::disease::DiseaseKind;
use crate::error::RequestError;
use crate::evaluation::confusion::ConfusionMatrix;
use crate::evaluation::pr_curve::PrCurve;
use crate::store::dataset::TestDataset;
use crate::store::model_store::ModelArtifact;

/// Held-out metrics for one disease's model: the confusion matrix over the
/// test set plus the precision-recall curve and its area.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    pub disease: DiseaseKind,
    pub confusion: ConfusionMatrix,
    pub curve: PrCurve,
}

impl EvaluationReport {
    /// Runs label prediction and probability scoring over every test row.
    /// Any prediction failure aborts the whole report; partial reports are
    /// never produced.
    pub fn compute(
        artifact: &ModelArtifact,
        dataset: &TestDataset,
    ) -> Result<EvaluationReport, RequestError> {
        let classifier = artifact.classifier();

        let mut confusion = ConfusionMatrix::default();
        let mut scores = Vec::with_capacity(dataset.len());
        for (row, &truth) in dataset.features.iter().zip(&dataset.labels) {
            let predicted = classifier.predict(row)?;
            confusion.record(truth, predicted);
            scores.push(classifier.predict_probability(row)?);
        }

        let curve = PrCurve::from_scores(&scores, &dataset.labels);
        Ok(EvaluationReport {
            disease: artifact.disease(),
            confusion,
            curve,
        })
    }
}
