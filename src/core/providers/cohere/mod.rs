//! Cohere Provider
//!
//! Cohere's v1 chat endpoint separates the system context (`preamble`) from
//! the single user `message`.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use crate::core::providers::base::{AdapterSettings, HttpTransport, non_empty_text};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ChatProvider;
use crate::core::types::message::{ChatMessage, last_user_content, system_content};

/// Public endpoint base
pub const DEFAULT_API_BASE: &str = "https://api.cohere.ai/v1";

/// Model used when the configuration does not name one
pub const DEFAULT_MODEL: &str = "command-r";

/// Cohere provider implementation
#[derive(Debug, Clone)]
pub struct CohereProvider {
    url: String,
    model: String,
    settings: AdapterSettings,
    transport: HttpTransport,
}

impl CohereProvider {
    pub const NAME: &'static str = "Cohere";

    pub fn new(settings: AdapterSettings) -> Result<Self, ProviderError> {
        let transport = HttpTransport::new(Self::NAME, settings.timeout)?;
        Ok(Self {
            url: format!("{}/chat", settings.base_or(DEFAULT_API_BASE)),
            model: settings.model_or(DEFAULT_MODEL).to_string(),
            settings,
            transport,
        })
    }
}

#[async_trait]
impl ChatProvider for CohereProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let body = build_request(&self.model, messages, &self.settings)?;

        debug!(model = %self.model, "Sending Cohere chat request");

        let request = self
            .transport
            .post(&self.url)
            .bearer_auth(&self.settings.api_key);
        let response = self.transport.send_json(request, &body).await?;
        non_empty_text(Self::NAME, response.get("text").and_then(Value::as_str))
    }
}

pub fn build_request(
    model: &str,
    messages: &[ChatMessage],
    settings: &AdapterSettings,
) -> Result<Value, ProviderError> {
    let message = last_user_content(messages).ok_or_else(|| {
        ProviderError::invalid_request(
            CohereProvider::NAME,
            "conversation must end with a user message",
        )
    })?;

    Ok(json!({
        "model": model,
        "message": message,
        "preamble": system_content(messages).unwrap_or_default(),
        "max_tokens": settings.max_tokens,
        "temperature": settings.temperature,
    }))
}
