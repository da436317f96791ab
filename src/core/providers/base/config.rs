//! Settings shared by every adapter

use std::time::Duration;

/// Resolved per-adapter settings
///
/// Built once at startup from [`crate::config::ProviderConfig`] after the
/// credential has been looked up; adapters never read the environment.
#[derive(Debug, Clone)]
pub struct AdapterSettings {
    /// Credential sent to the upstream
    pub api_key: String,
    /// Base URL override; the adapter's public endpoint is used when unset
    pub api_base: Option<String>,
    /// Model override
    pub model: Option<String>,
    /// Completion length cap forwarded to the upstream
    pub max_tokens: u32,
    /// Sampling temperature forwarded to the upstream
    pub temperature: f32,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl AdapterSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: None,
            model: None,
            max_tokens: 500,
            temperature: 0.7,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL without a trailing slash
    pub fn base_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.api_base
            .as_deref()
            .unwrap_or(default)
            .trim_end_matches('/')
    }

    pub fn model_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.model.as_deref().unwrap_or(default)
    }
}
