//! HTTP response handling for errors

use super::types::GatewayError;
use actix_web::http::StatusCode;
use actix_web::http::header::RETRY_AFTER;
use actix_web::{HttpResponse, ResponseError};

/// Message shown when every provider is disabled by configuration
pub const NOT_CONFIGURED_MESSAGE: &str = "AI service configuration error. Please contact support.";

/// Message shown when every configured provider failed for this request
pub const PROVIDERS_BUSY_MESSAGE: &str =
    "AI service is temporarily unavailable. Please wait a moment and try again.";

/// Message shown for anything the caller cannot act on
pub const GENERIC_ERROR_MESSAGE: &str =
    "Sorry, I encountered an error. Please try again or contact support if the problem persists.";

impl GatewayError {
    /// Human-readable message safe to show to the end user
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::InvalidInput(message) => message.clone(),
            GatewayError::RateLimited { message, .. } => message.clone(),
            GatewayError::NoProvidersConfigured => NOT_CONFIGURED_MESSAGE.to_string(),
            GatewayError::AllProvidersFailed { .. } => PROVIDERS_BUSY_MESSAGE.to_string(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            GatewayError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());

        if let GatewayError::RateLimited {
            retry_after_secs: Some(secs),
            ..
        } = self
        {
            builder.insert_header((RETRY_AFTER, secs.to_string()));
        }

        builder.json(ErrorResponse {
            error: self.user_message(),
        })
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
