//! Configuration management for the Gateway
//!
//! Configuration is layered: YAML file (or built-in defaults when the file is
//! missing), then environment overrides, then command-line overrides applied
//! by the binary.

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Overrides `server.host`
pub const ENV_HOST: &str = "GATEWAY_HOST";
/// Overrides `server.port`
pub const ENV_PORT: &str = "GATEWAY_PORT";
/// Overrides `rate_limit.max_requests`
pub const ENV_RATE_LIMIT: &str = "CHATBOT_RATE_LIMIT";
/// Overrides `rate_limit.window_secs`
pub const ENV_RATE_WINDOW: &str = "CHATBOT_RATE_WINDOW_SECS";

/// Main configuration struct for the Gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let gateway: GatewayConfig = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { gateway };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load the file if it exists, fall back to defaults, then apply the
    /// process environment
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?
        } else {
            warn!("Config file {:?} not found, using defaults", path);
            Self::default()
        };

        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `GATEWAY_*` / `CHATBOT_*` overrides from `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.gateway.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.gateway.server.port = parse_env(ENV_PORT, &port)?;
        }
        if let Some(max) = lookup(ENV_RATE_LIMIT) {
            self.gateway.rate_limit.max_requests = parse_env(ENV_RATE_LIMIT, &max)?;
        }
        if let Some(window) = lookup(ENV_RATE_WINDOW) {
            self.gateway.rate_limit.window_secs = parse_env(ENV_RATE_WINDOW, &window)?;
        }
        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get providers configuration
    pub fn providers(&self) -> &[ProviderConfig] {
        &self.gateway.providers
    }

    /// Get rate limit configuration
    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.gateway.rate_limit
    }

    /// Get chat configuration
    pub fn chat(&self) -> &ChatConfig {
        &self.gateway.chat
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        self.gateway.validate().map_err(GatewayError::Config)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.gateway)?)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| GatewayError::Config(format!("Invalid value for {}: {:?}", name, value)))
}
