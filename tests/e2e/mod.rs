//! End-to-end tests for chat-gateway
//!
//! These tests call the real providers and require API keys.
//! Run with: cargo test -- --ignored
//!
//! Environment variables (any subset):
//! - GROQ_API_KEY
//! - GOOGLE_AI_API_KEY
//! - HUGGINGFACE_API_KEY
//! - TOGETHER_API_KEY
//! - COHERE_API_KEY

pub mod live_providers;
