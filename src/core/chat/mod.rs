//! Chat request handling
//!
//! Turns an inbound chat request into a canonical conversation and runs it
//! through the provider fallback router.

pub mod conversation;
pub mod service;
pub mod types;


pub use conversation::{build_conversation, validate_message};
pub use service::{ChatService, RATE_LIMITED_MESSAGE};
pub use types::{ChatReply, ChatRequest};
