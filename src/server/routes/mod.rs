//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod chatbot;
pub mod health;

use actix_web::web;

/// Register every route
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    chatbot::configure_routes(cfg);
}
