//! # Chat Gateway
//!
//! Multi-provider AI chat gateway for the certificate platform assistant.
//!
//! ## Features
//!
//! - **Ordered Fallback**: Providers are tried one at a time in priority order; the first usable reply wins
//! - **Heterogeneous Providers**: Groq, Google AI Studio, Hugging Face, Together AI and Cohere behind one trait
//! - **Sliding-Window Rate Limiting**: Per-client admission control with atomic check-and-record
//! - **Stable Error Contract**: Callers see `400`/`429`/`500` with a human-readable `error`, never upstream bodies
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use chat_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Embedding the chat pipeline
//!
//! ```rust,no_run
//! use chat_gateway::{ChatRequest, Config, server::AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::from_config(Config::default())?;
//!     let reply = state.chat.handle("127.0.0.1", ChatRequest::new("How do I verify a certificate?")).await?;
//!     println!("{} answered: {}", reply.provider, reply.response);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

// Export the chat pipeline
pub use core::chat::{ChatReply, ChatRequest, ChatService};
pub use core::rate_limiter::{RateLimitResult, RateLimiter};
pub use core::router::{FailedAttempt, FallbackOutcome, FallbackRouter, RouterError};
pub use core::types::{ChatMessage, MessageRole};

// Export provider layer
pub use core::providers::{
    ChatProvider, ProviderDescriptor, ProviderError, ProviderRegistry, ProviderStatus,
};

use tracing::info;

/// A minimal chat gateway: configuration plus the HTTP server
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config)?;

        Ok(Self { config, server })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting chat gateway on {}", self.config.server().address());
        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
