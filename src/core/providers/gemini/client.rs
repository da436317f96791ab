//! Gemini Client

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use super::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::core::providers::base::{AdapterSettings, HttpTransport, non_empty_text};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ChatProvider;
use crate::core::types::message::{ChatMessage, last_user_content, system_content};

/// Google AI Studio provider
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    url: String,
    settings: AdapterSettings,
    transport: HttpTransport,
}

impl GeminiProvider {
    pub const NAME: &'static str = "Google AI Studio";

    pub fn new(settings: AdapterSettings) -> Result<Self, ProviderError> {
        let transport = HttpTransport::new(Self::NAME, settings.timeout)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            settings.base_or(DEFAULT_API_BASE),
            settings.model_or(DEFAULT_MODEL)
        );

        Ok(Self {
            url,
            settings,
            transport,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let prompt = build_prompt(messages).ok_or_else(|| {
            ProviderError::invalid_request(Self::NAME, "conversation must end with a user message")
        })?;
        let body = build_request(&prompt, &self.settings);

        debug!(url = %self.url, "Sending Gemini generateContent request");

        // The API key travels as a query parameter, not a header.
        let request = self
            .transport
            .post(&self.url)
            .query(&[("key", self.settings.api_key.as_str())]);

        let response = self.transport.send_json(request, &body).await?;
        extract_text(&response)
    }
}

/// Flatten the conversation into one prompt: `system + "\n\nUser: " + last user turn`
pub fn build_prompt(messages: &[ChatMessage]) -> Option<String> {
    let user = last_user_content(messages)?;
    Some(match system_content(messages) {
        Some(system) if !system.is_empty() => format!("{}\n\nUser: {}", system, user),
        _ => user.to_string(),
    })
}

pub fn build_request(prompt: &str, settings: &AdapterSettings) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": prompt }]
        }],
        "generationConfig": {
            "maxOutputTokens": settings.max_tokens,
            "temperature": settings.temperature,
        }
    })
}

/// Concatenate the text parts of the first candidate
pub fn extract_text(response: &Value) -> Result<String, ProviderError> {
    let parts = response
        .pointer("/candidates/0/content/parts")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ProviderError::response_parsing(GeminiProvider::NAME, "No candidates in response")
        })?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    non_empty_text(GeminiProvider::NAME, Some(&text))
}
