//! Main Groq Provider Implementation

use async_trait::async_trait;
use tracing::debug;

use super::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::core::providers::base::{AdapterSettings, OpenAICompatClient};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ChatProvider;
use crate::core::types::ChatMessage;

/// Groq provider implementation
#[derive(Debug, Clone)]
pub struct GroqProvider {
    client: OpenAICompatClient,
}

impl GroqProvider {
    pub const NAME: &'static str = "Groq";

    pub fn new(settings: AdapterSettings) -> Result<Self, ProviderError> {
        let client =
            OpenAICompatClient::new(Self::NAME, DEFAULT_API_BASE, DEFAULT_MODEL, settings)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ChatProvider for GroqProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        debug!(model = self.client.model(), "Sending Groq chat completion");
        self.client.chat(messages).await
    }
}
