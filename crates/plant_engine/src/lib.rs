//! Plant engine: network clients for identification and catalog lookups.
mod catalog;
mod engine;
mod http;
mod identify;
mod settings;
mod types;

pub use catalog::{identification_from_detail, search_result_from_record, CatalogClient, PlantCatalog};
pub use engine::EngineHandle;
pub use identify::{PlantIdentifier, VisionClient};
pub use settings::{
    CatalogConfig, ClientSettings, VisionConfig, DEFAULT_CATALOG_BASE_URL, DEFAULT_VISION_ENDPOINT,
    DEFAULT_VISION_MODEL, IDENTIFICATION_PROMPT,
};
pub use types::{ClientError, FailureKind};
