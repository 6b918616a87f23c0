//! Error types and HTTP response handling for rejected requests.
//!
//! The only failures a request can hit are API-key validation failures.
//! Both render as the same `{"message": ...}` body the demo endpoint uses,
//! with a plain 200 status and no machine-readable error code.

use crate::models::message::MessageResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Reasons the API-key gate can reject a request.
///
/// The `Display` text of each variant is exactly the message sent to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyError {
    /// No `api_key` query parameter, or an empty one.
    #[error("Must have API key")]
    MissingApiKey,

    /// An `api_key` was supplied but does not match the configured key.
    #[error("Invalid API key")]
    InvalidApiKey,
}

/// Convert ApiKeyError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "message": "Invalid API key" }
/// ```
///
/// Both variants answer with `200 OK`; clients tell them apart by message only.
impl IntoResponse for ApiKeyError {
    fn into_response(self) -> Response {
        let body = Json(MessageResponse::new(self.to_string()));

        (StatusCode::OK, body).into_response()
    }
}
