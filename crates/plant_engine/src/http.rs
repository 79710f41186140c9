use futures_util::StreamExt;
use serde_json::Value;

use crate::settings::ClientSettings;
use crate::ClientError;

/// Status and fully read body of one exchange.
pub(crate) struct RawResponse {
    pub status: u16,
    pub success: bool,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

pub(crate) fn build_client(settings: &ClientSettings) -> Result<reqwest::Client, ClientError> {
    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout)
        .build()
        .map_err(|err| ClientError::network(err.to_string()))
}

/// Sends `request` once and reads the body, refusing anything over `max_bytes`.
pub(crate) async fn execute(
    request: reqwest::RequestBuilder,
    max_bytes: u64,
) -> Result<RawResponse, ClientError> {
    let response = request.send().await.map_err(map_reqwest_error)?;
    let status = response.status();

    if let Some(content_len) = response.content_length() {
        if content_len > max_bytes {
            return Err(too_large(max_bytes));
        }
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(map_reqwest_error)?;
        if body.len() as u64 + chunk.len() as u64 > max_bytes {
            return Err(too_large(max_bytes));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(RawResponse {
        status: status.as_u16(),
        success: status.is_success(),
        body,
    })
}

fn too_large(max_bytes: u64) -> ClientError {
    ClientError::protocol(format!("response larger than {max_bytes} bytes"))
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    // Timeouts, refused connections and broken streams are all transport failures.
    // The request url carries the catalog token, so it never reaches the message.
    ClientError::network(err.without_url().to_string())
}

/// Picks the first non-empty string found at any of `pointers` in the body.
pub(crate) fn upstream_message(response: &RawResponse, pointers: &[&str], fallback: &str) -> String {
    response
        .json()
        .and_then(|body| {
            pointers.iter().find_map(|pointer| {
                body.pointer(pointer)
                    .and_then(Value::as_str)
                    .filter(|text| !text.is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| fallback.to_string())
}
