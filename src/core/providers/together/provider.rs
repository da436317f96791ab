use async_trait::async_trait;
use tracing::debug;

use super::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::core::providers::base::{AdapterSettings, OpenAICompatClient};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ChatProvider;
use crate::core::types::ChatMessage;

/// Together AI provider implementation
#[derive(Debug, Clone)]
pub struct TogetherProvider {
    client: OpenAICompatClient,
}

impl TogetherProvider {
    pub const NAME: &'static str = "Together AI";

    pub fn new(settings: AdapterSettings) -> Result<Self, ProviderError> {
        let client =
            OpenAICompatClient::new(Self::NAME, DEFAULT_API_BASE, DEFAULT_MODEL, settings)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ChatProvider for TogetherProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        debug!(model = self.client.model(), "Sending Together AI chat completion");
        self.client.chat(messages).await
    }
}
