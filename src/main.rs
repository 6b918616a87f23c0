//! Demo API Server - Main Application Entry Point
//!
//! A small REST API exposing one demo endpoint guarded by a static API key passed as the `api_key` query parameter.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Authentication**: single configured API key, compared as SHA-256 digests
//! - **Format**: JSON responses of the form `{"message": "..."}`
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build HTTP router with routes and middleware
//! 3. Start server on configured port
//! 4. Stop on Ctrl+C

mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let app = routes::build_app(&config);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        // Keep serving if the handler cannot be installed
        tracing::error!(%error, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
