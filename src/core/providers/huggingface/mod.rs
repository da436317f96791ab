//! Hugging Face Inference API Provider
//!
//! The hosted inference endpoint for text-generation models takes a bare
//! `inputs` string. Only the latest user turn is sent.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use crate::core::providers::base::{AdapterSettings, HttpTransport, non_empty_text};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ChatProvider;
use crate::core::types::message::{ChatMessage, last_user_content};

/// Public endpoint base
pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co";

/// Model used when the configuration does not name one
pub const DEFAULT_MODEL: &str = "microsoft/DialoGPT-large";

/// Hugging Face provider implementation
#[derive(Debug, Clone)]
pub struct HuggingFaceProvider {
    url: String,
    settings: AdapterSettings,
    transport: HttpTransport,
}

impl HuggingFaceProvider {
    pub const NAME: &'static str = "Hugging Face";

    pub fn new(settings: AdapterSettings) -> Result<Self, ProviderError> {
        let transport = HttpTransport::new(Self::NAME, settings.timeout)?;
        let url = format!(
            "{}/models/{}",
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
impl ChatProvider for HuggingFaceProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let input = last_user_content(messages).ok_or_else(|| {
            ProviderError::invalid_request(Self::NAME, "conversation must end with a user message")
        })?;
        let body = build_request(input, &self.settings);

        debug!(url = %self.url, "Sending Hugging Face inference request");

        let request = self
            .transport
            .post(&self.url)
            .bearer_auth(&self.settings.api_key);
        let response = self.transport.send_json(request, &body).await?;
        extract_generated_text(&response)
    }
}

pub fn build_request(input: &str, settings: &AdapterSettings) -> Value {
    json!({
        "inputs": input,
        "parameters": {
            "max_length": settings.max_tokens,
            "temperature": settings.temperature,
        }
    })
}

/// The endpoint answers either `[{"generated_text": ..}]` or `{"generated_text": ..}`
pub fn extract_generated_text(response: &Value) -> Result<String, ProviderError> {
    let text = response
        .pointer("/0/generated_text")
        .or_else(|| response.get("generated_text"))
        .and_then(Value::as_str);
    non_empty_text(HuggingFaceProvider::NAME, text)
}
