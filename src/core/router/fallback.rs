//! Sequential fallback over the provider registry

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use futures::FutureExt;
use tracing::{error, info, warn};

use super::error::{FailedAttempt, RouterError};
use crate::core::providers::ProviderRegistry;
use crate::core::providers::registry::ProviderDescriptor;
use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::ChatMessage;

/// Successful pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackOutcome {
    /// Trimmed, non-empty reply
    pub text: String,
    /// Name of the provider that answered
    pub provider: &'static str,
    /// Providers that failed before the answering one
    pub attempts: Vec<FailedAttempt>,
}

/// Tries enabled providers in ascending priority order, one at a time
///
/// Each provider gets exactly one call per pass. The first usable reply wins
/// and no lower-priority provider is contacted after it.
#[derive(Debug, Clone)]
pub struct FallbackRouter {
    registry: Arc<ProviderRegistry>,
}

impl FallbackRouter {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Run one fallback pass over `messages`
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<FallbackOutcome, RouterError> {
        if !self.registry.has_enabled() {
            error!("No AI providers configured");
            return Err(RouterError::NoProvidersConfigured);
        }

        let mut attempts = Vec::new();

        for provider in self.registry.enabled() {
            info!(
                provider = provider.name(),
                priority = provider.priority(),
                "Trying AI provider"
            );
            let start = Instant::now();

            match invoke(provider, messages).await {
                Ok(text) => {
                    info!(
                        provider = provider.name(),
                        latency_ms = start.elapsed().as_millis() as u64,
                        failed_before = attempts.len(),
                        "AI provider succeeded"
                    );
                    return Ok(FallbackOutcome {
                        text,
                        provider: provider.name(),
                        attempts,
                    });
                }
                Err(err) => {
                    warn!(
                        provider = provider.name(),
                        latency_ms = start.elapsed().as_millis() as u64,
                        error = %err,
                        "AI provider failed, trying next"
                    );
                    attempts.push(FailedAttempt::new(provider.name(), err));
                }
            }
        }

        error!(attempts = attempts.len(), "All AI providers failed");
        Err(RouterError::AllProvidersFailed { attempts })
    }
}

/// Call one adapter, turning panics and blank replies into failures
async fn invoke(provider: &ProviderDescriptor, messages: &[ChatMessage]) -> Result<String, String> {
    let call = AssertUnwindSafe(provider.adapter().chat(messages)).catch_unwind();

    match call.await {
        Ok(Ok(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Err(ProviderError::empty_completion(provider.name()).to_string())
            } else {
                Ok(trimmed.to_string())
            }
        }
        Ok(Err(err)) => Err(err.to_string()),
        Err(payload) => Err(format!(
            "{} adapter panicked: {}",
            provider.name(),
            panic_message(payload.as_ref())
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
