//! Rate Limiting Implementation
//!
//! Provides per-identity sliding window rate limiting for the chat endpoint.
//! The limiter is owned by the chat service rather than a process global, so
//! every server (and every test) gets its own store and clock.

mod clock;
mod limiter;
mod sliding_window;
mod types;
mod utils;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use limiter::RateLimiter;
pub use types::RateLimitResult;
