//! Core type definition module

pub mod message;

pub use message::{ChatMessage, MessageRole};
