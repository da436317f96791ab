//! Groq Provider
//!
//! Groq serves open models on LPU hardware behind an OpenAI-compatible API.
//! The free tier makes it the first provider tried by default.

mod provider;

pub use provider::GroqProvider;

/// Public endpoint base
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Free-tier model used when the configuration does not name one
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
