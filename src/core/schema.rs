use crate::core::disease::DiseaseKind;

/// One named numeric input with its widget-level bounds.
///
/// `label` is the prompt text shown to the user; `name` is the key expected
/// in raw field maps and matches the column name the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureField {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: Option<f64>,
    pub integer: bool,
}

impl FeatureField {
    const fn numeric(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            min: 0.0,
            max: None,
            integer: false,
        }
    }

    const fn whole(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            min: 0.0,
            max: None,
            integer: true,
        }
    }

    const fn coded(name: &'static str, label: &'static str, max: f64) -> Self {
        Self {
            name,
            label,
            min: 0.0,
            max: Some(max),
            integer: true,
        }
    }

    /// Widget-level acceptance check. Assembly itself never rejects on
    /// range; bounds are enforced at the form edge only.
    pub fn accepts(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min {
            return false;
        }
        if let Some(max) = self.max
            && value > max
        {
            return false;
        }
        if self.integer && value.fract() != 0.0 {
            return false;
        }
        true
    }
}

/// The ordered field list a disease's model was trained on.
///
/// Ordering is part of the model's contract: permuting it silently changes
/// predictions. Schemas are compiled in and versioned with the artifacts,
/// never edited independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSchema {
    pub disease: DiseaseKind,
    pub fields: &'static [FeatureField],
}

const DIABETES_FIELDS: &[FeatureField] = &[
    FeatureField::whole("Pregnancies", "Number of Pregnancies"),
    FeatureField::numeric("Glucose", "Glucose Level"),
    FeatureField::numeric("BloodPressure", "Blood Pressure value"),
    FeatureField::numeric("SkinThickness", "Skin Thickness value"),
    FeatureField::numeric("Insulin", "Insulin Level"),
    FeatureField::numeric("BMI", "BMI value"),
    FeatureField::numeric(
        "DiabetesPedigreeFunction",
        "Diabetes Pedigree Function value",
    ),
    FeatureField::whole("Age", "Age of the Person"),
];

const HEART_DISEASE_FIELDS: &[FeatureField] = &[
    FeatureField::whole("age", "Age"),
    FeatureField::coded("sex", "Sex (1 = Male, 0 = Female)", 1.0),
    FeatureField::coded("cp", "Chest Pain Type (0-3)", 3.0),
    FeatureField::whole("trestbps", "Resting Blood Pressure"),
    FeatureField::whole("chol", "Serum Cholesterol in mg/dl"),
    FeatureField::coded("fbs", "Fasting Blood Sugar > 120 mg/dl (1 = True, 0 = False)", 1.0),
    FeatureField::coded("restecg", "Resting ECG Results (0-2)", 2.0),
    FeatureField::whole("thalach", "Maximum Heart Rate"),
    FeatureField::coded("exang", "Exercise Induced Angina (1 = Yes, 0 = No)", 1.0),
    FeatureField::numeric("oldpeak", "ST Depression"),
    FeatureField::coded("slope", "Slope of Peak Exercise ST (0-2)", 2.0),
    FeatureField::coded("ca", "Number of Major Vessels (0-4)", 4.0),
    FeatureField::coded(
        "thal",
        "Thal (0 = Normal, 1 = Fixed Defect, 2 = Reversible Defect)",
        2.0,
    ),
];

const PARKINSONS_FIELDS: &[FeatureField] = &[
    FeatureField::numeric("fo", "MDVP:Fo(Hz)"),
    FeatureField::numeric("fhi", "MDVP:Fhi(Hz)"),
    FeatureField::numeric("flo", "MDVP:Flo(Hz)"),
    FeatureField::numeric("Jitter%", "MDVP:Jitter(%)"),
    FeatureField::numeric("Jitter(Abs)", "MDVP:Jitter(Abs)"),
    FeatureField::numeric("RAP", "MDVP:RAP"),
    FeatureField::numeric("PPQ", "MDVP:PPQ"),
    FeatureField::numeric("DDP", "Jitter:DDP"),
    FeatureField::numeric("Shimmer", "MDVP:Shimmer"),
    FeatureField::numeric("Shimmer(dB)", "MDVP:Shimmer(dB)"),
    FeatureField::numeric("APQ3", "Shimmer:APQ3"),
    FeatureField::numeric("APQ5", "Shimmer:APQ5"),
    FeatureField::numeric("APQ", "MDVP:APQ"),
    FeatureField::numeric("DDA", "Shimmer:DDA"),
    FeatureField::numeric("NHR", "NHR"),
    FeatureField::numeric("HNR", "HNR"),
    FeatureField::numeric("RPDE", "RPDE"),
    FeatureField::numeric("DFA", "DFA"),
    FeatureField::numeric("spread1", "spread1"),
    FeatureField::numeric("spread2", "spread2"),
    FeatureField::numeric("D2", "D2"),
    FeatureField::numeric("PPE", "PPE"),
];

const DIABETES_SCHEMA: FeatureSchema = FeatureSchema {
    disease: DiseaseKind::Diabetes,
    fields: DIABETES_FIELDS,
};

const HEART_DISEASE_SCHEMA: FeatureSchema = FeatureSchema {
    disease: DiseaseKind::HeartDisease,
    fields: HEART_DISEASE_FIELDS,
};

const PARKINSONS_SCHEMA: FeatureSchema = FeatureSchema {
    disease: DiseaseKind::Parkinsons,
    fields: PARKINSONS_FIELDS,
};

impl FeatureSchema {
    pub fn for_disease(kind: DiseaseKind) -> &'static FeatureSchema {
        match kind {
            DiseaseKind::Diabetes => &DIABETES_SCHEMA,
            DiseaseKind::HeartDisease => &HEART_DISEASE_SCHEMA,
            DiseaseKind::Parkinsons => &PARKINSONS_SCHEMA,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&FeatureField> {
        self.fields.iter().find(|f| f.name == name)
    }
}
