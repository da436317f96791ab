//! OpenAI-compatible chat completions wire format
//!
//! Shared by every upstream that accepts the structured `messages` list and
//! answers with a `choices` envelope.

use serde_json::{Value, json};

use super::config::AdapterSettings;
use super::http::{HttpTransport, non_empty_text};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::ChatMessage;

/// Client for one OpenAI-compatible `/chat/completions` endpoint
#[derive(Debug, Clone)]
pub struct OpenAICompatClient {
    provider: &'static str,
    url: String,
    model: String,
    settings: AdapterSettings,
    transport: HttpTransport,
}

impl OpenAICompatClient {
    pub fn new(
        provider: &'static str,
        default_base: &str,
        default_model: &str,
        settings: AdapterSettings,
    ) -> Result<Self, ProviderError> {
        let transport = HttpTransport::new(provider, settings.timeout)?;
        Ok(Self {
            provider,
            url: format!("{}/chat/completions", settings.base_or(default_base)),
            model: settings.model_or(default_model).to_string(),
            settings,
            transport,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let body = build_request(&self.model, messages, &self.settings);
        let request = self
            .transport
            .post(&self.url)
            .bearer_auth(&self.settings.api_key);

        let response = self.transport.send_json(request, &body).await?;
        extract_content(self.provider, &response)
    }
}

/// Build the request body; the conversation is forwarded unchanged
pub fn build_request(model: &str, messages: &[ChatMessage], settings: &AdapterSettings) -> Value {
    json!({
        "model": model,
        "messages": messages,
        "max_tokens": settings.max_tokens,
        "temperature": settings.temperature,
    })
}

/// Pull `choices[0].message.content` out of the response
pub fn extract_content(provider: &'static str, response: &Value) -> Result<String, ProviderError> {
    let content = response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str);
    non_empty_text(provider, content)
}
