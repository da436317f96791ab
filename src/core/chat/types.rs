//! Chat endpoint wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::ChatMessage;

/// Inbound chat request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    /// Earlier turns, oldest first
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            conversation_history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<ChatMessage>) -> Self {
        self.conversation_history = history;
        self
    }
}

/// Successful chat reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Generated text
    pub response: String,
    pub timestamp: DateTime<Utc>,
    /// Provider that produced the reply
    pub provider: String,
}
