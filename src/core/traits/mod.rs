//! Core traits module
//!
//! Contains all core abstract interface definitions

pub mod provider;

pub use provider::ChatProvider;
