//! Core rate limiter implementation

use super::clock::{Clock, SystemClock};
use crate::config::models::rate_limit::RateLimitConfig;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Per-identity sliding-window rate limiter
///
/// Each identity maps to the instants of its admitted requests inside the
/// trailing window. Clones share the same store.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    /// Whether limiting is applied at all
    pub(super) enabled: bool,
    /// Requests admitted per identity within one window
    pub(super) max_requests: u32,
    /// Window duration
    pub(super) window: Duration,
    /// Time source
    pub(super) clock: Arc<dyn Clock>,
    /// Admitted request instants by identity (IP or other caller key)
    pub(super) entries: Arc<DashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    /// Create a new rate limiter on the system clock
    pub fn new(config: &RateLimitConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a rate limiter with an injected clock
    pub fn with_clock(config: &RateLimitConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            enabled: config.enabled,
            max_requests: config.max_requests,
            window: config.window(),
            clock,
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Check if rate limiting is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get the configured limit
    pub fn limit(&self) -> u32 {
        self.max_requests
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

/// Drop instants that are `window` or more in the past
pub(super) fn prune(timestamps: &mut Vec<Instant>, now: Instant, window: Duration) {
    timestamps.retain(|&t| now.saturating_duration_since(t) < window);
}
