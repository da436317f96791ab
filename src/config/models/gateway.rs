//! Main gateway configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Provider configurations
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderConfig>,
    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Chat endpoint configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            providers: default_providers(),
            rate_limit: RateLimitConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;

        // Validate providers
        if self.providers.is_empty() {
            return Err("At least one provider must be configured".to_string());
        }

        let mut provider_names = HashSet::new();
        for provider in &self.providers {
            if !provider_names.insert(provider.name()) {
                return Err(format!("Duplicate provider name: {}", provider.name()));
            }
            provider.validate()?;
        }

        self.rate_limit
            .validate()
            .map_err(|e| format!("Rate limit config error: {}", e))?;

        self.chat
            .validate()
            .map_err(|e| format!("Chat config error: {}", e))?;

        Ok(())
    }

    /// Get provider by kind
    pub fn get_provider(&self, kind: ProviderKind) -> Option<&ProviderConfig> {
        self.providers.iter().find(|p| p.kind == kind)
    }
}
