//! The demo endpoint behind the API key gate.

use crate::models::message::MessageResponse;
use axum::Json;

/// Fixed payload returned by the demo endpoint.
pub const DEMO_MESSAGE: &str = "Just created an API in 5 minutes!";

/// Demo handler.
///
/// # Endpoint
///
/// `GET {BASE_PATH}/demo`
///
/// # Authentication
///
/// Only reached once the API key gate has allowed the request.
///
/// # Response (200 OK)
///
/// ```json
/// { "message": "Just created an API in 5 minutes!" }
/// ```
pub async fn demo() -> Json<MessageResponse> {
    tracing::info!("Demo endpoint called");

    Json(MessageResponse::new(DEMO_MESSAGE))
}
