use plant_core::{normalize, PlantIdentificationResult};
use plant_logging::{plant_debug, plant_warn};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;

use crate::http::{build_client, execute, upstream_message};
use crate::settings::{ClientSettings, VisionConfig, IDENTIFICATION_PROMPT};
use crate::ClientError;

#[async_trait::async_trait]
pub trait PlantIdentifier: Send + Sync {
    /// Identifies the plant in a base64-encoded JPEG. One attempt, no retries.
    async fn identify(&self, image_base64: &str) -> Result<PlantIdentificationResult, ClientError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: [ContentPart<'a>; 2],
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

/// Identification client for an OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone)]
pub struct VisionClient {
    config: VisionConfig,
    settings: ClientSettings,
    client: reqwest::Client,
}

impl VisionClient {
    pub fn new(config: VisionConfig, settings: ClientSettings) -> Result<Self, ClientError> {
        let client = build_client(&settings)?;
        Ok(Self {
            config,
            settings,
            client,
        })
    }

    fn request_body(&self, image_base64: &str) -> Result<Vec<u8>, ClientError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: [
                    ContentPart::Text {
                        text: IDENTIFICATION_PROMPT,
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:image/jpeg;base64,{image_base64}"),
                        },
                    },
                ],
            }],
            max_tokens: self.config.max_tokens,
        };
        serde_json::to_vec(&request).map_err(|err| ClientError::protocol(err.to_string()))
    }
}

#[async_trait::async_trait]
impl PlantIdentifier for VisionClient {
    async fn identify(&self, image_base64: &str) -> Result<PlantIdentificationResult, ClientError> {
        plant_debug!(
            "identify model={} image_len={}",
            self.config.model,
            image_base64.len()
        );
        let body = self.request_body(image_base64)?;
        let request = self
            .client
            .post(self.config.endpoint.clone())
            .bearer_auth(&self.config.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        let response = execute(request, self.settings.max_bytes).await.inspect_err(|err| {
            plant_warn!("identify transport failure: {}", err);
        })?;

        if !response.success {
            let message = upstream_message(&response, &["/error/message"], "Failed to identify plant");
            plant_warn!("identify rejected status={} message={}", response.status, message);
            return Err(ClientError::upstream(response.status, message));
        }

        let envelope = response.json().ok_or_else(|| {
            plant_warn!("identify response body is not JSON");
            ClientError::parse()
        })?;
        let content = envelope
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| ClientError::protocol("invalid response format"))?;

        normalize(content).map_err(|err| {
            plant_warn!("identify content rejected: {}", err);
            ClientError::parse()
        })
    }
}
