use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// The fixed set of screened conditions. Every model artifact, feature
/// schema and test dataset is keyed by one of these.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumMessage,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum DiseaseKind {
    #[strum(message = "Diabetes", detailed_message = "8-field metabolic screen")]
    Diabetes,
    #[strum(message = "Heart Disease", detailed_message = "13-field cardiac screen")]
    HeartDisease,
    #[strum(message = "Parkinsons", detailed_message = "22-field vocal-biomarker screen")]
    Parkinsons,
}

impl DiseaseKind {
    /// File name of the serialized classifier under the models directory.
    pub fn model_file(&self) -> &'static str {
        match self {
            DiseaseKind::Diabetes => "diabetes_model.json",
            DiseaseKind::HeartDisease => "hybrid_heart_disease_model.json",
            DiseaseKind::Parkinsons => "hybrid_parkinsons_model.json",
        }
    }

    /// File name of the held-out (features, labels) pair used for the
    /// evaluation report.
    pub fn test_data_file(&self) -> &'static str {
        match self {
            DiseaseKind::Diabetes => "diabetes_test_data.json",
            DiseaseKind::HeartDisease => "heart_test_data.json",
            DiseaseKind::Parkinsons => "parkinsons_test_data.json",
        }
    }

    pub fn positive_diagnosis(&self) -> &'static str {
        match self {
            DiseaseKind::Diabetes => "The person is Diabetic",
            DiseaseKind::HeartDisease => "The person is having heart disease",
            DiseaseKind::Parkinsons => "The person has Parkinsons disease",
        }
    }

    pub fn negative_diagnosis(&self) -> &'static str {
        match self {
            DiseaseKind::Diabetes => "The person is Not Diabetic",
            DiseaseKind::HeartDisease => "The person does not have any heart disease",
            DiseaseKind::Parkinsons => "The person does not have Parkinsons disease",
        }
    }
}
