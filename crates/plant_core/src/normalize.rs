//! Maps untrusted upstream JSON into complete identification records.
//!
//! Every field is defaulted on its own so a partially populated payload still
//! yields a renderable result. Only a payload that is not a JSON object at all
//! is rejected.

use plant_logging::plant_debug;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::result::{
    CareInstructions, DiseaseInfo, PlantIdentificationResult, DESCRIPTION_UNAVAILABLE,
    SOIL_UNAVAILABLE, SUNLIGHT_UNAVAILABLE, TREATMENT_UNAVAILABLE, UNKNOWN_NAME,
    WATERING_UNAVAILABLE,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("failed to parse API response: {0}")]
    InvalidJson(String),
    #[error("failed to parse API response: expected a JSON object")]
    NotAnObject,
}

/// Parses `raw` as JSON and normalizes it.
pub fn normalize(raw: &str) -> Result<PlantIdentificationResult, NormalizeError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|err| NormalizeError::InvalidJson(err.to_string()))?;
    normalize_value(&value)
}

/// Normalizes an already parsed payload.
pub fn normalize_value(value: &Value) -> Result<PlantIdentificationResult, NormalizeError> {
    let object = value.as_object().ok_or(NormalizeError::NotAnObject)?;

    let care = object.get("careInstructions").and_then(Value::as_object);
    let care_instructions = CareInstructions {
        watering: nested_text(care, "watering", WATERING_UNAVAILABLE),
        sunlight: nested_text(care, "sunlight", SUNLIGHT_UNAVAILABLE),
        soil: nested_text(care, "soil", SOIL_UNAVAILABLE),
    };

    let diseases = object
        .get("diseases")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(normalize_disease).collect::<Vec<_>>());

    let result = PlantIdentificationResult {
        scientific_name: text_or(object, "scientificName", UNKNOWN_NAME),
        common_name: text_or(object, "commonName", UNKNOWN_NAME),
        confidence: confidence_or_zero(object.get("confidence")),
        care_instructions,
        diseases,
    };
    plant_debug!(
        "normalized identification scientific_name={} confidence={}",
        result.scientific_name,
        result.confidence
    );
    Ok(result)
}

fn normalize_disease(entry: &Value) -> DiseaseInfo {
    let fields = entry.as_object();
    DiseaseInfo::Detailed {
        name: nested_text(fields, "name", UNKNOWN_NAME),
        description: nested_text(fields, "description", DESCRIPTION_UNAVAILABLE),
        treatment: nested_text(fields, "treatment", TREATMENT_UNAVAILABLE),
    }
}

/// Returns the non-empty string at `key`, or `default`.
///
/// Missing keys, `null`, empty strings and non-string values all count as
/// absent.
pub fn text_or(object: &Map<String, Value>, key: &str, default: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn nested_text(object: Option<&Map<String, Value>>, key: &str, default: &str) -> String {
    match object {
        Some(object) => text_or(object, key, default),
        None => default.to_string(),
    }
}

/// Reads a confidence score, clamped to `[0.0, 1.0]`. Non-numeric is `0.0`.
pub fn confidence_or_zero(value: Option<&Value>) -> f64 {
    match value.and_then(Value::as_f64) {
        Some(score) if score.is_finite() => score.clamp(0.0, 1.0),
        _ => 0.0,
    }
}
