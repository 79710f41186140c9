//! Plant core: identification records, normalization and the history log.
mod history;
mod normalize;
mod plant;
mod result;
mod sample;

pub use history::{EventSource, HistoryStore};
pub use normalize::{confidence_or_zero, normalize, normalize_value, text_or, NormalizeError};
pub use plant::{HistoryItem, ImageRef, Plant};
pub use result::{
    CareInstructions, DiseaseInfo, PlantIdentificationResult, PlantSearchResult,
    DESCRIPTION_UNAVAILABLE, SOIL_UNAVAILABLE, SUNLIGHT_UNAVAILABLE, TREATMENT_UNAVAILABLE,
    UNKNOWN_NAME, WATERING_UNAVAILABLE,
};
pub use sample::{find_sample_plant, sample_catalog};
