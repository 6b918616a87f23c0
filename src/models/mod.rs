//! Data models shared by the middleware and handlers.

/// Accepted API key configuration
pub mod api_key;
/// JSON message body
pub mod message;
