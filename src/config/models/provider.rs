//! Provider configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upstream provider kinds the gateway has adapters for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Groq,
    Gemini,
    HuggingFace,
    Together,
    Cohere,
}

impl ProviderKind {
    /// Every kind, in default fallback order
    pub const ALL: [ProviderKind; 5] = [
        ProviderKind::Groq,
        ProviderKind::Gemini,
        ProviderKind::HuggingFace,
        ProviderKind::Together,
        ProviderKind::Cohere,
    ];

    /// Name reported to clients and in logs
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "Groq",
            ProviderKind::Gemini => "Google AI Studio",
            ProviderKind::HuggingFace => "Hugging Face",
            ProviderKind::Together => "Together AI",
            ProviderKind::Cohere => "Cohere",
        }
    }

    /// Environment variable holding the credential
    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "GROQ_API_KEY",
            ProviderKind::Gemini => "GOOGLE_AI_API_KEY",
            ProviderKind::HuggingFace => "HUGGINGFACE_API_KEY",
            ProviderKind::Together => "TOGETHER_API_KEY",
            ProviderKind::Cohere => "COHERE_API_KEY",
        }
    }

    pub fn default_priority(&self) -> i32 {
        match self {
            ProviderKind::Groq => 1,
            ProviderKind::Gemini => 2,
            ProviderKind::HuggingFace => 3,
            ProviderKind::Together => 4,
            ProviderKind::Cohere => 5,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Which adapter serves this entry
    pub kind: ProviderKind,
    /// Lower is tried first; defaults to the kind's position
    pub priority: Option<i32>,
    /// Literal API key; takes precedence over `api_key_env`
    pub api_key: Option<String>,
    /// Environment variable to read the key from
    pub api_key_env: Option<String>,
    /// Base URL override
    pub api_base: Option<String>,
    /// Model override
    pub model: Option<String>,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            priority: None,
            api_key: None,
            api_key_env: None,
            api_base: None,
            model: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.display_name()
    }

    pub fn priority(&self) -> i32 {
        self.priority.unwrap_or_else(|| self.kind.default_priority())
    }

    pub fn api_key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or_else(|| self.kind.default_api_key_env())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolve the credential from the process environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the credential with a custom variable lookup
    ///
    /// Blank values count as absent.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |value: String| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        self.api_key
            .clone()
            .and_then(non_blank)
            .or_else(|| lookup(self.api_key_env()).and_then(non_blank))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err(format!("Timeout for provider {} cannot be 0", self.name()));
        }
        if self.max_tokens == 0 {
            return Err(format!("max_tokens for provider {} cannot be 0", self.name()));
        }
        Ok(())
    }
}

/// One entry per adapter kind, in default priority order
pub fn default_providers() -> Vec<ProviderConfig> {
    ProviderKind::ALL.into_iter().map(ProviderConfig::new).collect()
}
