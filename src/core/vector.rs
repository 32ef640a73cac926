use serde_json::{Map, Value};

use crate::core::disease::DiseaseKind;
use crate::core::schema::FeatureSchema;
use crate::error::RequestError;

/// An ordered single-sample input, assembled fresh per request and never
/// persisted. Values follow the schema order exactly regardless of how the
/// raw field map was built.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    disease: DiseaseKind,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Coerce a raw field map into the schema's ordered value sequence.
    ///
    /// Every schema field must be present under its exact name; nothing is
    /// defaulted, clamped or renamed. JSON numbers pass through, strings
    /// are parsed; anything else is rejected.
    pub fn assemble(
        schema: &FeatureSchema,
        raw: &Map<String, Value>,
    ) -> Result<FeatureVector, RequestError> {
        let mut values = Vec::with_capacity(schema.len());
        for field in schema.fields {
            let value = raw
                .get(field.name)
                .ok_or_else(|| RequestError::MissingField(field.name.to_string()))?;
            values.push(coerce_numeric(field.name, value)?);
        }
        Ok(FeatureVector {
            disease: schema.disease,
            values,
        })
    }

    pub fn disease(&self) -> DiseaseKind {
        self.disease
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn coerce_numeric(field: &str, value: &Value) -> Result<f64, RequestError> {
    let not_numeric = || RequestError::NotNumeric {
        field: field.to_string(),
        value: value.to_string(),
    };

    match value {
        Value::Number(n) => n.as_f64().ok_or_else(not_numeric),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| not_numeric()),
        _ => Err(not_numeric()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(entries: &[(&str, Value)]) -> Map<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn diabetes_sample_assembles_in_schema_order() {
        // Entries deliberately shuffled relative to the schema.
        let fields = raw(&[
            ("Age", json!(50)),
            ("Glucose", json!(148)),
            ("BMI", json!(33.6)),
            ("Pregnancies", json!(6)),
            ("Insulin", json!(0)),
            ("BloodPressure", json!(72)),
            ("DiabetesPedigreeFunction", json!(0.627)),
            ("SkinThickness", json!(35)),
        ]);

        let schema = FeatureSchema::for_disease(DiseaseKind::Diabetes);
        let vector = FeatureVector::assemble(schema, &fields).unwrap();
        assert_eq!(
            vector.values(),
            [6.0, 148.0, 72.0, 35.0, 0.0, 33.6, 0.627, 50.0]
        );
        assert_eq!(vector.disease(), DiseaseKind::Diabetes);
    }

    #[test]
    fn integer_input_coerces_to_float() {
        let schema = FeatureSchema::for_disease(DiseaseKind::HeartDisease);
        let mut fields = Map::new();
        for field in schema.fields {
            fields.insert(field.name.to_string(), json!(0));
        }
        fields.insert("sex".to_string(), json!(1));

        let vector = FeatureVector::assemble(schema, &fields).unwrap();
        assert_eq!(vector.values()[1], 1.0_f64);
        assert_eq!(vector.len(), 13);
    }

    #[test]
    fn string_input_is_parsed() {
        let schema = FeatureSchema::for_disease(DiseaseKind::Diabetes);
        let mut fields = Map::new();
        for field in schema.fields {
            fields.insert(field.name.to_string(), json!("0"));
        }
        fields.insert("BMI".to_string(), json!(" 33.6 "));

        let vector = FeatureVector::assemble(schema, &fields).unwrap();
        assert_eq!(vector.values()[5], 33.6);
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let schema = FeatureSchema::for_disease(DiseaseKind::Diabetes);
        let mut fields = Map::new();
        for field in schema.fields {
            if field.name != "Age" {
                fields.insert(field.name.to_string(), json!(1));
            }
        }

        let err = FeatureVector::assemble(schema, &fields).unwrap_err();
        assert_eq!(err, RequestError::MissingField("Age".to_string()));
    }

    #[test]
    fn non_numeric_field_is_rejected() {
        let schema = FeatureSchema::for_disease(DiseaseKind::Diabetes);
        let mut fields = Map::new();
        for field in schema.fields {
            fields.insert(field.name.to_string(), json!(1));
        }
        fields.insert("Glucose".to_string(), json!("high"));

        match FeatureVector::assemble(schema, &fields).unwrap_err() {
            RequestError::NotNumeric { field, .. } => assert_eq!(field, "Glucose"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn booleans_are_not_silently_coerced() {
        let schema = FeatureSchema::for_disease(DiseaseKind::Diabetes);
        let mut fields = Map::new();
        for field in schema.fields {
            fields.insert(field.name.to_string(), json!(1));
        }
        fields.insert("Insulin".to_string(), json!(true));

        assert!(matches!(
            FeatureVector::assemble(schema, &fields),
            Err(RequestError::NotNumeric { .. })
        ));
    }
}
