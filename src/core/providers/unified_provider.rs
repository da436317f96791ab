//! Unified Provider Error Handling
//!
//! Single error type for all provider adapters.
//!
//! | Variant | Purpose | HTTP Status |
//! |------|------|------------|
//! | ApiError | Upstream answered with a non-success status | upstream status |
//! | Network | Connection or transport failure | - |
//! | Timeout | Request exceeded the adapter timeout | - |
//! | ResponseParsing | Body did not match the expected envelope | - |
//! | EmptyCompletion | Envelope parsed but the reply text was blank | - |
//! | InvalidRequest | Conversation cannot be expressed for this provider | - |
//! | Configuration | Adapter could not be built | - |
//!
//! These errors never leave the fallback router: they are logged, collected
//! into the attempt list and the next provider is tried.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("API error for {provider} (status {status}): {message}")]
    ApiError {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("Failed to parse {provider} response: {message}")]
    ResponseParsing {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} returned an empty completion")]
    EmptyCompletion { provider: &'static str },

    #[error("Invalid request for {provider}: {message}")]
    InvalidRequest {
        provider: &'static str,
        message: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    pub fn api_error(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider,
            status,
            message: message.into(),
        }
    }

    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    pub fn response_parsing(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            provider,
            message: message.into(),
        }
    }

    pub fn empty_completion(provider: &'static str) -> Self {
        Self::EmptyCompletion { provider }
    }

    pub fn invalid_request(provider: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider,
            message: message.into(),
        }
    }

    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    /// Map a transport error from reqwest onto the matching variant
    pub fn from_reqwest(provider: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(provider, err.to_string())
        } else if err.is_decode() {
            Self::response_parsing(provider, err.to_string())
        } else {
            Self::network(provider, err.to_string())
        }
    }

    /// Name of the provider that raised the error
    pub fn provider(&self) -> &'static str {
        match self {
            Self::ApiError { provider, .. }
            | Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::ResponseParsing { provider, .. }
            | Self::EmptyCompletion { provider }
            | Self::InvalidRequest { provider, .. }
            | Self::Configuration { provider, .. } => provider,
        }
    }

    /// Upstream HTTP status, when the upstream answered at all
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
