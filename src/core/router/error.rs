//! Router error types
//!
//! Only the two terminal outcomes of a fallback pass are errors here. A
//! single provider failing is recorded as a [`FailedAttempt`] and the pass
//! continues.

/// One provider that was tried and did not produce a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedAttempt {
    /// Provider display name
    pub provider: String,
    /// Rendered error, kept for logs only
    pub error: String,
}

impl FailedAttempt {
    pub fn new(provider: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            error: error.into(),
        }
    }
}

/// Router error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    /// No provider has a credential
    #[error("No providers configured")]
    NoProvidersConfigured,

    /// Every enabled provider was tried once and failed
    #[error("All {} provider(s) failed", attempts.len())]
    AllProvidersFailed {
        /// Failures in the order they were tried
        attempts: Vec<FailedAttempt>,
    },
}
