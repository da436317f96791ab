//! Chat service: the single entry point into the gateway core

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::conversation::{build_conversation, validate_message};
use super::types::{ChatReply, ChatRequest};
use crate::config::models::ChatConfig;
use crate::core::providers::ProviderRegistry;
use crate::core::rate_limiter::RateLimiter;
use crate::core::router::FallbackRouter;
use crate::utils::error::{GatewayError, Result};

/// Message returned to callers over their request budget
pub const RATE_LIMITED_MESSAGE: &str =
    "Too many requests. Please wait a moment before sending another message.";

/// Validates, rate limits and answers chat requests
#[derive(Debug, Clone)]
pub struct ChatService {
    config: ChatConfig,
    limiter: Arc<RateLimiter>,
    router: FallbackRouter,
}

impl ChatService {
    pub fn new(config: ChatConfig, limiter: Arc<RateLimiter>, registry: Arc<ProviderRegistry>) -> Self {
        Self {
            config,
            limiter,
            router: FallbackRouter::new(registry),
        }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        self.router.registry()
    }

    pub fn limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Handle one chat request from `identity`
    ///
    /// Validation runs before the limiter, so a rejected message neither
    /// consumes the caller's budget nor reaches any provider.
    pub async fn handle(&self, identity: &str, request: ChatRequest) -> Result<ChatReply> {
        validate_message(&request.message, self.config.max_message_length)?;

        let limit = self.limiter.check_and_record(identity);
        if !limit.allowed {
            debug!(
                identity,
                retry_after_secs = ?limit.retry_after_secs,
                "Chat request rate limited"
            );
            return Err(GatewayError::rate_limited(
                RATE_LIMITED_MESSAGE,
                limit.retry_after_secs,
            ));
        }

        let messages = build_conversation(
            &self.config.system_prompt,
            &request.conversation_history,
            self.config.history_limit,
            &request.message,
        );

        let outcome = self.router.complete(&messages).await?;

        info!(
            provider = outcome.provider,
            failed_before = outcome.attempts.len(),
            "Chat reply generated"
        );

        Ok(ChatReply {
            response: outcome.text,
            timestamp: Utc::now(),
            provider: outcome.provider.to_string(),
        })
    }
}
