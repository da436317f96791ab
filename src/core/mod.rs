//! Core functionality for the Gateway
//!
//! This module contains the core business logic and data structures.

pub mod chat;
pub mod providers;
pub mod rate_limiter;
pub mod router;
pub mod traits;
pub mod types;
