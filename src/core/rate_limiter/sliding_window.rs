//! Sliding window admission

use super::limiter::{RateLimiter, prune};
use super::types::RateLimitResult;
use tracing::debug;

impl RateLimiter {
    /// Atomically check and record a request
    ///
    /// Pruning, counting and appending happen while the identity's map shard
    /// is write-locked, so concurrent requests from one identity cannot both
    /// see a free slot. Rejected requests are not recorded.
    pub fn check_and_record(&self, key: &str) -> RateLimitResult {
        if !self.enabled {
            return RateLimitResult::unlimited(self.max_requests);
        }

        let now = self.clock.now();
        let limit = self.max_requests;

        // Avoid String allocation if key already exists
        let mut entry = match self.entries.get_mut(key) {
            Some(e) => e,
            None => self.entries.entry(key.to_string()).or_default(),
        };

        prune(&mut entry, now, self.window);

        let count = entry.len() as u32;
        let allowed = count < limit;

        if allowed {
            entry.push(now);
        }

        // Time until the oldest request expires
        let reset_after_secs = entry
            .first()
            .map(|&oldest| {
                let remaining = self.window.saturating_sub(now.duration_since(oldest));
                remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
            })
            .unwrap_or_else(|| self.window.as_secs());

        let current_count = entry.len() as u32;
        drop(entry);

        if !allowed {
            debug!(
                "Rate limit exceeded for {}: {}/{} requests",
                key, current_count, limit
            );
        }

        RateLimitResult {
            allowed,
            current_count,
            limit,
            remaining: limit.saturating_sub(current_count),
            reset_after_secs,
            retry_after_secs: (!allowed).then(|| reset_after_secs.max(1)),
        }
    }
}
