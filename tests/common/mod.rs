//! Common test utilities for chat-gateway
//!
//! - Scripted in-process providers
//! - Configuration and conversation fixtures
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::providers::{CallLog, ScriptedProvider, Step};
//!
//! let log = CallLog::default();
//! let a = ScriptedProvider::new("A", Step::fail(), &log);
//! let b = ScriptedProvider::new("B", Step::reply("Hello!"), &log);
//! ```

pub mod providers;

pub use fixtures::{config_with_limit, history, test_app_state};
pub use providers::{CallLog, ScriptedProvider, Step, registry_of};

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).map(|v| v.trim().is_empty()).unwrap_or(true) {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}
