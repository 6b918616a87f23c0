//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that returns a JSON response.
/// Demo endpoint
pub mod demo;
/// Service health endpoint
pub mod health;
/// Gated fallback for unrouted paths
pub mod fallback;
