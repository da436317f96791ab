//! Chat provider capability
//!
//! Every upstream adapter implements [`ChatProvider`]. The fallback router
//! holds adapters as trait objects in priority order and never looks at a
//! provider's name except to report which one answered.

use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::ChatMessage;
use async_trait::async_trait;

/// One upstream LLM provider behind a uniform chat interface
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Unique, human-readable provider name
    fn name(&self) -> &'static str;

    /// Produce one reply for the conversation.
    ///
    /// `messages` is non-empty and ends with a user turn. Implementations make
    /// exactly one outbound call, never retry, and return a trimmed non-empty
    /// string or a [`ProviderError`].
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ProviderError>;
}
