//! Error handling for the gateway
//!
//! This module defines the crate-wide error type and its HTTP mapping.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::{
    ErrorResponse, GENERIC_ERROR_MESSAGE, NOT_CONFIGURED_MESSAGE, PROVIDERS_BUSY_MESSAGE,
};
pub use types::{GatewayError, Result};
