//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::config::Config;
use crate::core::chat::ChatService;
use crate::core::providers::ProviderRegistry;
use crate::core::rate_limiter::RateLimiter;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across worker threads.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Chat pipeline: validation, rate limiting and provider fallback
    pub chat: Arc<ChatService>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, chat: ChatService) -> Self {
        Self {
            config: Arc::new(config),
            chat: Arc::new(chat),
        }
    }

    /// Build providers and the rate limiter from configuration
    pub fn from_config(config: Config) -> Result<Self> {
        let registry = ProviderRegistry::from_config(config.providers())?;
        Ok(Self::with_registry(config, registry))
    }

    /// Build state around an already constructed registry
    pub fn with_registry(config: Config, registry: ProviderRegistry) -> Self {
        let limiter = RateLimiter::new(config.rate_limit());
        let chat = ChatService::new(
            config.chat().clone(),
            Arc::new(limiter),
            Arc::new(registry),
        );
        Self::new(config, chat)
    }

    pub fn registry(&self) -> &ProviderRegistry {
        self.chat.registry()
    }

    pub fn limiter(&self) -> &Arc<RateLimiter> {
        self.chat.limiter()
    }
}
