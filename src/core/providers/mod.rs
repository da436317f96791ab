//! AI provider adapters
//!
//! One module per upstream provider. Each adapter translates the canonical
//! conversation into its provider's wire format and the provider's response
//! envelope back into plain text.

// Base infrastructure
pub mod base;

// Provider modules
pub mod cohere;
pub mod gemini;
pub mod groq;
pub mod huggingface;
pub mod together;

// Registry and unified error
pub mod registry;
pub mod unified_provider;

pub use crate::core::traits::ChatProvider;
pub use cohere::CohereProvider;
pub use gemini::GeminiProvider;
pub use groq::GroqProvider;
pub use huggingface::HuggingFaceProvider;
pub use registry::{ProviderDescriptor, ProviderRegistry, ProviderStatus, build_adapter};
pub use together::TogetherProvider;
pub use unified_provider::ProviderError;
