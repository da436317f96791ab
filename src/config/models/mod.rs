//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod chat;
pub mod gateway;
pub mod provider;
pub mod rate_limit;
pub mod server;

// Re-export all configuration types
pub use chat::*;
pub use gateway::*;
pub use provider::*;
pub use rate_limit::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3001
}

/// Default per-provider request timeout in seconds
pub fn default_timeout() -> u64 {
    10
}

pub fn default_max_tokens() -> u32 {
    500
}

pub fn default_temperature() -> f32 {
    0.7
}

/// Requests admitted per client within one window
pub fn default_max_requests() -> u32 {
    15
}

pub fn default_window_secs() -> u64 {
    60
}

pub fn default_cleanup_interval() -> u64 {
    300
}

pub fn default_max_message_length() -> usize {
    1000
}

pub fn default_history_limit() -> usize {
    4
}

pub fn default_cors_max_age() -> u32 {
    3600
}

pub(crate) fn default_true() -> bool {
    true
}
