//! Router assembly.
//!
//! The demo router, including its fallback, sits behind the API key gate;
//! the health route stays public.

use crate::{
    config::Config, handlers, middleware::api_key::api_key_middleware,
    models::api_key::ApiKeyConfig,
};
use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

/// Routes protected by the API key gate.
///
/// The gate also covers paths with no route, which fall back to a JSON 404.
/// The host application decides where this router is mounted.
pub fn demo_router(api_key: ApiKeyConfig) -> Router {
    Router::new()
        .route("/demo", get(handlers::demo::demo))
        // Fallback must be registered before the layer so the gate wraps it too
        .fallback(handlers::fallback::not_found)
        // Apply the API key gate to every request reaching this router
        .layer(axum_middleware::from_fn_with_state(
            api_key,
            api_key_middleware,
        ))
}

/// Build the full application router from configuration.
pub fn build_app(config: &Config) -> Router {
    let gated = demo_router(ApiKeyConfig::new(&config.api_key));

    // Public routes (no API key required)
    let app = Router::new().route("/health", get(handlers::health::health_check));

    let app = match config.mount_path() {
        Some(path) => {
            tracing::info!("Mounting demo router under {}", path);
            app.nest(&path, gated)
        }
        None => app.merge(gated),
    };

    app.layer(TraceLayer::new_for_http())
}
