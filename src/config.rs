//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `API_KEY` (optional): the single accepted API key, defaults to `12345`
/// - `BASE_PATH` (optional): prefix the demo router is mounted under, defaults to the root
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_api_key")]
    pub api_key: String,

    #[serde(default)]
    pub base_path: String,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_api_key() -> String {
    "12345".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: default_port(),
            api_key: default_api_key(),
            base_path: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable value cannot be parsed
    /// into the expected type (e.g. a non-numeric `SERVER_PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: base_path -> BASE_PATH
        envy::from_env::<Config>()
    }

    /// Mount prefix for the gated router, normalized to `/segment[/segment]`.
    ///
    /// Returns `None` when the router should sit at the root.
    pub fn mount_path(&self) -> Option<String> {
        let trimmed = self.base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(format!("/{trimmed}"))
        }
    }
}
