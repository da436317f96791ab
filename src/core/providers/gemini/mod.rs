//! Google AI Studio (Gemini) Provider
//!
//! Gemini's `generateContent` endpoint takes a single flattened prompt here:
//! the system context followed by the latest user turn. Earlier history is
//! not forwarded.

mod client;

pub use client::{GeminiProvider, build_prompt, build_request, extract_text};

/// Public endpoint base
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Model used when the configuration does not name one
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
