use plant_core::{
    text_or, CareInstructions, PlantIdentificationResult, PlantSearchResult,
    DESCRIPTION_UNAVAILABLE, SOIL_UNAVAILABLE, SUNLIGHT_UNAVAILABLE, UNKNOWN_NAME,
    WATERING_UNAVAILABLE,
};
use plant_logging::{plant_debug, plant_warn};
use reqwest::header::ACCEPT;
use serde_json::{Map, Value};
use url::Url;

use crate::http::{build_client, execute, upstream_message, RawResponse};
use crate::settings::{CatalogConfig, ClientSettings};
use crate::ClientError;

#[async_trait::async_trait]
pub trait PlantCatalog: Send + Sync {
    /// Searches by common name. Malformed records are defaulted, never dropped.
    async fn search(&self, query: &str) -> Result<Vec<PlantSearchResult>, ClientError>;

    /// Fetches one record, reshaped as an identification result.
    async fn get_details(&self, id: &str) -> Result<PlantIdentificationResult, ClientError>;
}

const CATALOG_ERROR_POINTERS: [&str; 3] = ["/error", "/error/message", "/message"];

/// Client for a Trefle-style plant database.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    config: CatalogConfig,
    settings: ClientSettings,
    client: reqwest::Client,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig, settings: ClientSettings) -> Result<Self, ClientError> {
        let client = build_client(&settings)?;
        Ok(Self {
            config,
            settings,
            client,
        })
    }

    fn plants_url(&self, id: Option<&str>) -> Result<Url, ClientError> {
        let mut url = self.config.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::protocol("catalog base url cannot carry a path"))?;
            segments.pop_if_empty().push("plants");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url.query_pairs_mut().append_pair("token", &self.config.token);
        Ok(url)
    }

    /// Performs a GET and returns the parsed body, or the matching failure.
    async fn get_json(&self, url: Url, fallback: &str) -> Result<Value, ClientError> {
        let request = self
            .client
            .get(url)
            .header(ACCEPT, "application/json");
        let response = execute(request, self.settings.max_bytes).await.inspect_err(|err| {
            plant_warn!("catalog transport failure: {}", err);
        })?;
        check_status(&response, fallback)?;
        serde_json::from_slice(&response.body).map_err(|err| {
            plant_warn!("catalog body is not JSON: {}", err);
            ClientError::parse()
        })
    }
}

fn check_status(response: &RawResponse, fallback: &str) -> Result<(), ClientError> {
    if response.success {
        return Ok(());
    }
    let message = upstream_message(response, &CATALOG_ERROR_POINTERS, fallback);
    plant_warn!("catalog rejected status={} message={}", response.status, message);
    Err(ClientError::upstream(response.status, message))
}

#[async_trait::async_trait]
impl PlantCatalog for CatalogClient {
    async fn search(&self, query: &str) -> Result<Vec<PlantSearchResult>, ClientError> {
        plant_debug!("catalog search query={:?}", query);
        let mut url = self.plants_url(None)?;
        url.query_pairs_mut().append_pair("filter[common_name]", query);

        let body = self.get_json(url, "Failed to search plants").await?;
        let records = body
            .get("data")
            .and_then(Value::as_array)
            .ok_or_else(|| ClientError::protocol("invalid response format"))?;

        let results: Vec<PlantSearchResult> = records.iter().map(search_result_from_record).collect();
        plant_debug!("catalog search query={:?} results={}", query, results.len());
        Ok(results)
    }

    async fn get_details(&self, id: &str) -> Result<PlantIdentificationResult, ClientError> {
        plant_debug!("catalog details id={:?}", id);
        let url = self.plants_url(Some(id))?;

        let body = self.get_json(url, "Failed to get plant details").await?;
        let record = body
            .get("data")
            .and_then(Value::as_object)
            .ok_or_else(|| ClientError::protocol("no data received from API"))?;

        Ok(identification_from_detail(record))
    }
}

/// Maps one catalog record; every field defaults independently.
pub fn search_result_from_record(record: &Value) -> PlantSearchResult {
    let empty = Map::new();
    let fields = record.as_object().unwrap_or(&empty);
    PlantSearchResult {
        id: record_id(fields),
        scientific_name: text_or(fields, "scientific_name", UNKNOWN_NAME),
        common_name: text_or(fields, "common_name", UNKNOWN_NAME),
        thumbnail_url: text_or(fields, "image_url", ""),
        description: text_or(fields, "description", DESCRIPTION_UNAVAILABLE),
    }
}

/// The catalog has no confidence or disease data, so those are fixed.
pub fn identification_from_detail(fields: &Map<String, Value>) -> PlantIdentificationResult {
    PlantIdentificationResult {
        scientific_name: text_or(fields, "scientific_name", UNKNOWN_NAME),
        common_name: text_or(fields, "common_name", UNKNOWN_NAME),
        confidence: 1.0,
        care_instructions: CareInstructions {
            watering: text_or(fields, "watering", WATERING_UNAVAILABLE),
            sunlight: text_or(fields, "sunlight", SUNLIGHT_UNAVAILABLE),
            soil: text_or(fields, "soil", SOIL_UNAVAILABLE),
        },
        diseases: Some(Vec::new()),
    }
}

fn record_id(fields: &Map<String, Value>) -> String {
    match fields.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => {
            plant_warn!("catalog record without id");
            String::new()
        }
    }
}
