use serde::{Deserialize, Serialize};

pub const UNKNOWN_NAME: &str = "Unknown";
pub const WATERING_UNAVAILABLE: &str = "Watering information not available";
pub const SUNLIGHT_UNAVAILABLE: &str = "Sunlight information not available";
pub const SOIL_UNAVAILABLE: &str = "Soil information not available";
pub const DESCRIPTION_UNAVAILABLE: &str = "No description available";
pub const TREATMENT_UNAVAILABLE: &str = "No treatment information available";

/// Fully-defaulted identification record produced by the vision pipeline or
/// a catalog detail lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantIdentificationResult {
    pub scientific_name: String,
    pub common_name: String,
    /// Model confidence in `[0.0, 1.0]`.
    pub confidence: f64,
    pub care_instructions: CareInstructions,
    /// `None` when the source said nothing about diseases at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diseases: Option<Vec<DiseaseInfo>>,
}

impl PlantIdentificationResult {
    /// Confidence as a one-decimal percentage, e.g. `"92.0%"`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareInstructions {
    pub watering: String,
    pub sunlight: String,
    pub soil: String,
}

impl Default for CareInstructions {
    fn default() -> Self {
        Self {
            watering: WATERING_UNAVAILABLE.to_string(),
            sunlight: SUNLIGHT_UNAVAILABLE.to_string(),
            soil: SOIL_UNAVAILABLE.to_string(),
        }
    }
}

/// A disease entry from either data source.
///
/// History plants only carry disease names while vision results carry the
/// full record. Both shapes are kept distinct; the accessors present a
/// `Named` entry as a detailed one with empty description and treatment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiseaseInfo {
    Named(String),
    Detailed {
        name: String,
        description: String,
        treatment: String,
    },
}

impl DiseaseInfo {
    pub fn named(name: impl Into<String>) -> Self {
        DiseaseInfo::Named(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            DiseaseInfo::Named(name) => name,
            DiseaseInfo::Detailed { name, .. } => name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            DiseaseInfo::Named(_) => "",
            DiseaseInfo::Detailed { description, .. } => description,
        }
    }

    pub fn treatment(&self) -> &str {
        match self {
            DiseaseInfo::Named(_) => "",
            DiseaseInfo::Detailed { treatment, .. } => treatment,
        }
    }

    pub fn has_detail(&self) -> bool {
        matches!(self, DiseaseInfo::Detailed { .. })
    }
}

/// Lighter projection of a catalog record used for browsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantSearchResult {
    pub id: String,
    pub scientific_name: String,
    pub common_name: String,
    /// Always present; empty when the catalog has no image.
    pub thumbnail_url: String,
    pub description: String,
}
