use std::time::Duration;

use url::Url;

pub const DEFAULT_VISION_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_VISION_MODEL: &str = "gpt-4-vision-preview";
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://trefle.io/api/v1";

/// Prompt sent alongside every photo. It is the only thing shaping the reply.
pub const IDENTIFICATION_PROMPT: &str = "Please identify this plant and provide detailed information about its care requirements and potential diseases. Format the response as JSON with the following structure: { \"scientificName\": \"\", \"commonName\": \"\", \"confidence\": 0.0, \"careInstructions\": { \"watering\": \"\", \"sunlight\": \"\", \"soil\": \"\" }, \"diseases\": [{ \"name\": \"\", \"description\": \"\", \"treatment\": \"\" }] }";

/// Transport limits shared by both clients.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VisionConfig {
    pub endpoint: Url,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
}

impl VisionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_VISION_ENDPOINT).expect("default vision endpoint is valid"),
            api_key: api_key.into(),
            model: DEFAULT_VISION_MODEL.to_string(),
            max_tokens: 1000,
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, url::ParseError> {
        self.endpoint = Url::parse(endpoint)?;
        Ok(self)
    }
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: Url,
    pub token: String,
}

impl CatalogConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: Url::parse(DEFAULT_CATALOG_BASE_URL)
                .expect("default catalog base url is valid"),
            token: token.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, url::ParseError> {
        self.base_url = Url::parse(base_url)?;
        Ok(self)
    }
}
