//! Utility modules for the gateway
//!
//! - **error**: crate-wide error type and its HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use logging::{LogFormat, init_logging};
