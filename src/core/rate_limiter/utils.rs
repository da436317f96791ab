//! Utility functions for rate limiter

use super::limiter::{RateLimiter, prune};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

impl RateLimiter {
    /// Drop identities with no requests left inside the window
    ///
    /// Returns the number of identities removed.
    pub fn cleanup(&self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();

        self.entries.retain(|_, timestamps| {
            prune(timestamps, now, self.window);
            !timestamps.is_empty()
        });

        before.saturating_sub(self.entries.len())
    }

    /// Start background cleanup task
    pub fn start_cleanup_task(self: Arc<Self>, every: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                let removed = self.cleanup();
                if removed > 0 {
                    debug!(removed, "Rate limiter dropped idle identities");
                }
            }
        })
    }

    /// Number of identities currently tracked
    pub fn tracked_identities(&self) -> usize {
        self.entries.len()
    }

    /// Requests recorded for `key` inside the current window
    pub fn current_count(&self, key: &str) -> u32 {
        let now = self.clock.now();
        self.entries
            .get(key)
            .map(|timestamps| {
                timestamps
                    .iter()
                    .filter(|&&t| now.saturating_duration_since(t) < self.window)
                    .count() as u32
            })
            .unwrap_or(0)
    }
}
