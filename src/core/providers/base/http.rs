use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;

use crate::core::providers::unified_provider::ProviderError;

/// Connect timeout applied to every adapter client
pub const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Upstream error bodies are cut to this many characters before they are logged
const MAX_ERROR_BODY_CHARS: usize = 300;

/// HTTP client owned by a single adapter
///
/// The whole-request timeout is baked into the client so a hung upstream
/// surfaces as [`ProviderError::Timeout`] and the router moves on.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    provider: &'static str,
    client: Client,
}

impl HttpTransport {
    pub fn new(provider: &'static str, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
            .build()
            .map_err(|e| {
                ProviderError::configuration(provider, format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { provider, client })
    }

    /// Start a POST request
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.client.post(url)
    }

    /// Send `body` as JSON and decode a JSON response
    ///
    /// Non-success statuses become [`ProviderError::ApiError`] carrying a
    /// truncated copy of the upstream body.
    pub async fn send_json(
        &self,
        request: RequestBuilder,
        body: &Value,
    ) -> Result<Value, ProviderError> {
        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(self.provider, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::api_error(
                self.provider,
                status.as_u16(),
                truncate(&text, MAX_ERROR_BODY_CHARS),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::from_reqwest(self.provider, e))?;

        debug!(provider = self.provider, bytes = bytes.len(), "Upstream response received");

        serde_json::from_slice(&bytes)
            .map_err(|e| ProviderError::response_parsing(self.provider, e.to_string()))
    }
}

/// Trim a completion and reject it if nothing is left
pub fn non_empty_text(provider: &'static str, text: Option<&str>) -> Result<String, ProviderError> {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => Ok(t.to_string()),
        Some(_) => Err(ProviderError::empty_completion(provider)),
        None => Err(ProviderError::response_parsing(
            provider,
            "completion text missing from response",
        )),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
