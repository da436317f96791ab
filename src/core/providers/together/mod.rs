//! Together AI Provider
//!
//! Together hosts Llama models behind an OpenAI-compatible API.

mod provider;

pub use provider::TogetherProvider;

/// Public endpoint base
pub const DEFAULT_API_BASE: &str = "https://api.together.xyz/v1";

/// Model used when the configuration does not name one
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.3-70B-Instruct-Turbo";
