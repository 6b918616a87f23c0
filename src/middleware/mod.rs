//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers.
//! They can:
//! - Check request credentials
//! - Short-circuit requests (reject missing or wrong keys)

/// API key query-parameter gate
pub mod api_key;
