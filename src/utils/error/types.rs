//! Error types for the gateway

use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
///
/// Only the aggregate outcome of a chat request is represented here. Errors
/// raised by a single upstream provider stay inside the fallback router and
/// never reach this type.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Caller sent an unusable request (empty or over-long message, malformed body)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Caller exceeded the per-identity request budget
    #[error("Rate limit exceeded: {message}")]
    RateLimited {
        message: String,
        /// Seconds until the caller's oldest request leaves the window
        retry_after_secs: Option<u64>,
    },

    /// Every provider is disabled by configuration
    #[error("No AI providers configured")]
    NoProvidersConfigured,

    /// Every enabled provider was tried and none produced a reply
    #[error("All AI providers failed after {attempts} attempt(s)")]
    AllProvidersFailed {
        /// Number of providers tried
        attempts: usize,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
