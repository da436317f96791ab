//! Module
//!
//! Contains base components shared by all providers

pub mod config;
pub mod http;
pub mod openai_compat;

pub use config::AdapterSettings;
pub use http::{HttpTransport, non_empty_text};
pub use openai_compat::OpenAICompatClient;
