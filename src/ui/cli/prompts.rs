use anyhow::{Context, Result};
use inquire::CustomType;
use inquire::validator::Validation;
use serde_json::{Map, Number, Value};

use crate::core::schema::{FeatureField, FeatureSchema};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

/// Walks the schema in order, prompting one numeric value per field with
/// the widget-level bounds enforced in the validator. The returned map is
/// exactly what `FeatureVector::assemble` expects.
pub fn prompt_fields(schema: &FeatureSchema) -> Result<Map<String, Value>> {
    let mut raw = Map::new();
    for field in schema.fields {
        let value = prompt_field(field)
            .with_context(|| format!("failed while prompting for '{}'", field.name))?;
        raw.insert(field.name.to_string(), number_value(value));
    }
    Ok(raw)
}

fn prompt_field(field: &FeatureField) -> Result<f64, inquire::InquireError> {
    let spec = *field;
    let help = bounds_help(field);
    CustomType::<f64>::new(field.label)
        .with_default(field.min)
        .with_help_message(&help)
        .with_error_message("enter a numeric value")
        .with_validator(move |v: &f64| {
            if spec.accepts(*v) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(out_of_range_message(&spec).into()))
            }
        })
        .prompt()
}

fn bounds_help(field: &FeatureField) -> String {
    format!("{DIM_ITALIC}{}{RESET}", bounds_text(field))
}

fn bounds_text(field: &FeatureField) -> String {
    let mut parts = vec![format!("min {}", field.min)];
    if let Some(max) = field.max {
        parts.push(format!("max {max}"));
    }
    if field.integer {
        parts.push("whole number".to_string());
    }
    parts.join(", ")
}

fn out_of_range_message(field: &FeatureField) -> String {
    format!("'{}' must satisfy: {}", field.name, bounds_text(field))
}

fn number_value(value: f64) -> Value {
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::disease::DiseaseKind;

    #[test]
    fn bounds_text_reflects_the_field_spec() {
        let schema = FeatureSchema::for_disease(DiseaseKind::HeartDisease);
        assert_eq!(
            bounds_text(schema.field("cp").unwrap()),
            "min 0, max 3, whole number"
        );
        assert_eq!(bounds_text(schema.field("oldpeak").unwrap()), "min 0");
    }

    #[test]
    fn out_of_range_message_names_the_field() {
        let schema = FeatureSchema::for_disease(DiseaseKind::HeartDisease);
        let msg = out_of_range_message(schema.field("sex").unwrap());
        assert!(msg.contains("'sex'"));
        assert!(msg.contains("max 1"));
    }

    #[test]
    fn prompt_values_become_json_numbers() {
        assert_eq!(number_value(33.6), serde_json::json!(33.6));
    }
}
