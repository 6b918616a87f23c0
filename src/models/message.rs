//! The `{"message": ...}` body shared by every gated response.

use serde::Serialize;

/// Response body for the demo endpoint and for gate rejections.
///
/// # JSON Example
///
/// ```json
/// { "message": "Just created an API in 5 minutes!" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
