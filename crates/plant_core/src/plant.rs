use serde::{Deserialize, Serialize};

use crate::result::{CareInstructions, DiseaseInfo, PlantIdentificationResult, DESCRIPTION_UNAVAILABLE};

/// Opaque reference to an image asset (bundled resource name, file path or URI).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A plant eligible for the history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub scientific_name: String,
    pub common_name: String,
    pub image: ImageRef,
    pub description: String,
    pub care_instructions: CareInstructions,
    pub diseases: Vec<DiseaseInfo>,
}

impl Plant {
    /// Builds a history plant from an identification result.
    ///
    /// The result carries no description, so the sentinel is used.
    pub fn from_identification(
        id: impl Into<String>,
        result: &PlantIdentificationResult,
        image: ImageRef,
    ) -> Self {
        Self {
            id: id.into(),
            scientific_name: result.scientific_name.clone(),
            common_name: result.common_name.clone(),
            image,
            description: DESCRIPTION_UNAVAILABLE.to_string(),
            care_instructions: result.care_instructions.clone(),
            diseases: result.diseases.clone().unwrap_or_default(),
        }
    }
}

/// One timestamped entry in the history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Event id, distinct from `plant.id`.
    pub id: String,
    /// RFC 3339 timestamp of the event.
    pub timestamp: String,
    pub plant: Plant,
}
