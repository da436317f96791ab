//! Input validation and canonical conversation construction

use crate::core::types::ChatMessage;
use crate::utils::error::{GatewayError, Result};

pub const EMPTY_MESSAGE_ERROR: &str = "Message is required and must be a non-empty string";

/// Error text for messages over the length limit
pub fn too_long_message(max_chars: usize) -> String {
    format!(
        "Message too long. Please keep messages under {} characters.",
        max_chars
    )
}

/// Reject blank messages and messages longer than `max_chars` characters
pub fn validate_message(message: &str, max_chars: usize) -> Result<()> {
    if message.trim().is_empty() {
        return Err(GatewayError::invalid_input(EMPTY_MESSAGE_ERROR));
    }
    if message.chars().count() > max_chars {
        return Err(GatewayError::invalid_input(too_long_message(max_chars)));
    }
    Ok(())
}

/// System prompt, then the last `history_limit` history entries, then the
/// new user message
pub fn build_conversation(
    system_prompt: &str,
    history: &[ChatMessage],
    history_limit: usize,
    message: &str,
) -> Vec<ChatMessage> {
    let recent = &history[history.len().saturating_sub(history_limit)..];

    let mut messages = Vec::with_capacity(recent.len() + 2);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend_from_slice(recent);
    messages.push(ChatMessage::user(message));
    messages
}
