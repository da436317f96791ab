//! Helper functions for creating specific error types

use super::types::GatewayError;

impl GatewayError {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn rate_limited<S: Into<String>>(message: S, retry_after_secs: Option<u64>) -> Self {
        Self::RateLimited {
            message: message.into(),
            retry_after_secs,
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the caller is at fault (4xx) rather than the gateway or upstream (5xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::RateLimited { .. })
    }
}
