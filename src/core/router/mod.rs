//! Provider fallback router
//!
//! Walks the enabled providers in priority order and returns the first
//! usable reply. Individual provider errors are logged and collected, never
//! returned on their own.

pub mod error;
pub mod fallback;


pub use error::{FailedAttempt, RouterError};
pub use fallback::{FallbackOutcome, FallbackRouter};
