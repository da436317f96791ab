//! Integration tests for chat-gateway
//!
//! These tests drive the public API across module boundaries. Upstream
//! providers are either scripted in-process or served by `wiremock`.

pub mod provider_wire_tests;
pub mod router_tests;
