//! Fallback for paths the gated router has no route for.

use crate::models::message::MessageResponse;
use axum::{Json, http::StatusCode};

/// Answer for unrouted paths once the API key gate has let them through.
///
/// # Response (404 Not Found)
///
/// ```json
/// { "message": "Not found" }
/// ```
pub async fn not_found() -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::NOT_FOUND, Json(MessageResponse::new("Not found")))
}
