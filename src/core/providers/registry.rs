//! Provider Registry
//!
//! Holds every configured provider in fallback order. Built once at startup
//! and shared read-only afterwards.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::base::AdapterSettings;
use super::cohere::CohereProvider;
use super::gemini::GeminiProvider;
use super::groq::GroqProvider;
use super::huggingface::HuggingFaceProvider;
use super::together::TogetherProvider;
use super::unified_provider::ProviderError;
use crate::config::models::{ProviderConfig, ProviderKind};
use crate::core::traits::ChatProvider;
use crate::utils::error::{GatewayError, Result};

/// One entry in the fallback chain
#[derive(Clone)]
pub struct ProviderDescriptor {
    name: &'static str,
    enabled: bool,
    priority: i32,
    adapter: Arc<dyn ChatProvider>,
}

impl ProviderDescriptor {
    pub fn new(adapter: Arc<dyn ChatProvider>, priority: i32, enabled: bool) -> Self {
        Self {
            name: adapter.name(),
            enabled,
            priority,
            adapter,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fixed at startup from credential presence
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn adapter(&self) -> &Arc<dyn ChatProvider> {
        &self.adapter
    }
}

impl std::fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .field("priority", &self.priority)
            .finish()
    }
}

/// Health view of a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStatus {
    pub name: String,
    pub enabled: bool,
    pub configured: bool,
    pub priority: i32,
}

/// Provider registry ordered by ascending priority
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: Vec<ProviderDescriptor>,
}

impl ProviderRegistry {
    /// Create a registry; ties in priority keep their given order
    pub fn new(mut providers: Vec<ProviderDescriptor>) -> Self {
        providers.sort_by_key(|p| p.priority);
        Self { providers }
    }

    /// Build adapters from configuration, reading credentials from the
    /// process environment
    pub fn from_config(configs: &[ProviderConfig]) -> Result<Self> {
        Self::from_config_with(configs, |name| std::env::var(name).ok())
    }

    /// Build adapters from configuration with a custom credential lookup
    pub fn from_config_with<F>(configs: &[ProviderConfig], lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut providers = Vec::with_capacity(configs.len());

        for config in configs {
            let api_key = config.resolve_api_key_with(&lookup);
            let enabled = api_key.is_some();

            if enabled {
                info!(provider = config.name(), priority = config.priority(), "Provider enabled");
            } else {
                warn!(
                    provider = config.name(),
                    env = config.api_key_env(),
                    "Provider disabled: no API key"
                );
            }

            let adapter = build_adapter(config, api_key.unwrap_or_default())
                .map_err(|e| GatewayError::Config(e.to_string()))?;
            providers.push(ProviderDescriptor::new(adapter, config.priority(), enabled));
        }

        Ok(Self::new(providers))
    }

    /// Every registered provider, in fallback order
    pub fn all(&self) -> &[ProviderDescriptor] {
        &self.providers
    }

    /// Enabled providers, in fallback order
    pub fn enabled(&self) -> impl Iterator<Item = &ProviderDescriptor> {
        self.providers.iter().filter(|p| p.enabled)
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled().count()
    }

    pub fn has_enabled(&self) -> bool {
        self.providers.iter().any(|p| p.enabled)
    }

    /// Get provider by name
    pub fn get(&self, name: &str) -> Option<&ProviderDescriptor> {
        self.providers.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn status(&self) -> Vec<ProviderStatus> {
        self.providers
            .iter()
            .map(|p| ProviderStatus {
                name: p.name.to_string(),
                enabled: p.enabled,
                configured: p.enabled,
                priority: p.priority,
            })
            .collect()
    }
}

/// Construct the adapter for one configuration entry
pub fn build_adapter(
    config: &ProviderConfig,
    api_key: String,
) -> std::result::Result<Arc<dyn ChatProvider>, ProviderError> {
    let mut settings = AdapterSettings::new(api_key).with_timeout(config.timeout());
    settings.max_tokens = config.max_tokens;
    settings.temperature = config.temperature;
    if let Some(base) = &config.api_base {
        settings = settings.with_api_base(base.clone());
    }
    if let Some(model) = &config.model {
        settings = settings.with_model(model.clone());
    }

    Ok(match config.kind {
        ProviderKind::Groq => Arc::new(GroqProvider::new(settings)?),
        ProviderKind::Gemini => Arc::new(GeminiProvider::new(settings)?),
        ProviderKind::HuggingFace => Arc::new(HuggingFaceProvider::new(settings)?),
        ProviderKind::Together => Arc::new(TogetherProvider::new(settings)?),
        ProviderKind::Cohere => Arc::new(CohereProvider::new(settings)?),
    })
}
