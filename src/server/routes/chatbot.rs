//! Chatbot endpoints
//!
//! `POST /api/chatbot` answers a chat message; `GET /api/chatbot/health`
//! reports which providers are configured.

use crate::core::chat::ChatRequest;
use crate::core::chat::conversation::EMPTY_MESSAGE_ERROR;
use crate::core::providers::ProviderStatus;
use crate::core::types::MessageRole;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

/// Identity used when the peer address is unknown
pub const UNKNOWN_CLIENT: &str = "unknown";

pub const INVALID_ROLE_MESSAGE: &str =
    "Invalid conversation history: role must be one of system, user, or assistant";

pub const INVALID_BODY_MESSAGE: &str =
    "Invalid request body. Expected { message: string, conversationHistory?: [{ role, content }] }";

/// Status reported when at least one provider is enabled
pub const STATUS_OK: &str = "OK";
/// Status reported when every provider is disabled
pub const STATUS_NOT_CONFIGURED: &str = "No providers configured";

/// Configure chatbot routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/chatbot")
            .app_data(json_config())
            .route("", web::post().to(chat))
            .route("/", web::post().to(chat))
            .route("/health", web::get().to(chatbot_health)),
    );
}

/// Chat endpoint
pub async fn chat(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, GatewayError> {
    let identity = client_identity(&req, state.config.server().trust_forwarded_headers);
    let request = parse_chat_request(body.into_inner())?;

    let reply = state
        .chat
        .handle(&identity, request)
        .await
        .inspect_err(|e| {
            if !e.is_client_error() {
                error!(client = %identity, error = %e, "Chatbot request failed");
            }
        })?;

    Ok(HttpResponse::Ok().json(reply))
}

/// Chatbot health payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatbotHealth {
    pub status: String,
    pub providers: Vec<ProviderStatus>,
    pub timestamp: DateTime<Utc>,
}

/// Provider availability endpoint
pub async fn chatbot_health(state: web::Data<AppState>) -> HttpResponse {
    debug!("Chatbot health check requested");

    let registry = state.registry();
    let status = if registry.has_enabled() {
        STATUS_OK
    } else {
        STATUS_NOT_CONFIGURED
    };

    HttpResponse::Ok().json(ChatbotHealth {
        status: status.to_string(),
        providers: registry.status(),
        timestamp: Utc::now(),
    })
}

/// Caller identity for rate limiting
///
/// The socket peer IP unless `trust_forwarded` is set, in which case the
/// proxy-supplied `Forwarded`/`X-Forwarded-For` address wins.
pub fn client_identity(req: &HttpRequest, trust_forwarded: bool) -> String {
    if trust_forwarded {
        return req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or(UNKNOWN_CLIENT)
            .to_string();
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Turn a syntactically valid JSON body into a [`ChatRequest`]
///
/// `message` is checked by hand so that a bad history entry is never
/// reported as a bad message.
pub fn parse_chat_request(body: Value) -> Result<ChatRequest, GatewayError> {
    if !body.get("message").is_some_and(Value::is_string) {
        return Err(GatewayError::invalid_input(EMPTY_MESSAGE_ERROR));
    }

    let has_unknown_role = body
        .get("conversationHistory")
        .and_then(Value::as_array)
        .is_some_and(|history| {
            history.iter().any(|entry| {
                entry
                    .get("role")
                    .is_some_and(|role| MessageRole::deserialize(role).is_err())
            })
        });
    if has_unknown_role {
        return Err(GatewayError::invalid_input(INVALID_ROLE_MESSAGE));
    }

    serde_json::from_value(body).map_err(|e| {
        debug!(error = %e, "Rejected chatbot request body");
        GatewayError::invalid_input(INVALID_BODY_MESSAGE)
    })
}

/// JSON extractor config answering unreadable bodies with `400 { error }`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req| {
        debug!(error = %err, "Rejected chatbot request body");
        let response = GatewayError::invalid_input(INVALID_BODY_MESSAGE).error_response();
        InternalError::from_response(err, response).into()
    })
}
