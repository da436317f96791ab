//! Provider test utilities
//!
//! In-process providers whose behaviour is fixed up front. Every call is
//! appended to a shared [`CallLog`] so tests can assert on invocation order
//! and on the exact conversation each provider received.

use async_trait::async_trait;
use chat_gateway::core::providers::ProviderDescriptor;
use chat_gateway::{ChatMessage, ChatProvider, ProviderError, ProviderRegistry};
use parking_lot::Mutex;
use std::sync::Arc;

/// What a scripted provider does when called
#[derive(Debug, Clone)]
pub enum Step {
    Reply(String),
    Fail,
    Blank,
    Panic,
}

impl Step {
    pub fn reply(text: impl Into<String>) -> Self {
        Step::Reply(text.into())
    }

    pub fn fail() -> Self {
        Step::Fail
    }
}

/// One recorded invocation
#[derive(Debug, Clone)]
pub struct Call {
    pub provider: &'static str,
    pub messages: Vec<ChatMessage>,
}

/// Shared, ordered record of provider invocations
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    pub fn order(&self) -> Vec<&'static str> {
        self.calls.lock().iter().map(|c| c.provider).collect()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, provider: &'static str, messages: &[ChatMessage]) {
        self.calls.lock().push(Call {
            provider,
            messages: messages.to_vec(),
        });
    }
}

/// Provider that always performs the same [`Step`]
#[derive(Debug)]
pub struct ScriptedProvider {
    name: &'static str,
    step: Step,
    log: CallLog,
}

impl ScriptedProvider {
    pub fn new(name: &'static str, step: Step, log: &CallLog) -> Self {
        Self {
            name,
            step,
            log: log.clone(),
        }
    }
}

#[async_trait]
impl ChatProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        self.log.record(self.name, messages);

        match &self.step {
            Step::Reply(text) => Ok(text.clone()),
            Step::Fail => Err(ProviderError::api_error(self.name, 503, "upstream overloaded")),
            Step::Blank => Ok("   ".to_string()),
            Step::Panic => panic!("{} adapter bug", self.name),
        }
    }
}

/// Build a registry from `(name, priority, enabled, step)` tuples
pub fn registry_of(
    log: &CallLog,
    entries: Vec<(&'static str, i32, bool, Step)>,
) -> ProviderRegistry {
    let providers = entries
        .into_iter()
        .map(|(name, priority, enabled, step)| {
            ProviderDescriptor::new(
                Arc::new(ScriptedProvider::new(name, step, log)),
                priority,
                enabled,
            )
        })
        .collect();
    ProviderRegistry::new(providers)
}
