//! API key configuration for the request gate.
//!
//! The accepted key is held only as a SHA-256 hash, so the plain value does
//! not linger in memory after the router is built.

use sha2::{Digest, Sha256};

/// The single API key the gate accepts.
///
/// Built once at router construction and shared with the middleware through
/// axum `State`. Swapping the value in tests is just `ApiKeyConfig::new("other")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyConfig {
    /// SHA-256 hash of the accepted API key (64 hex characters)
    key_hash: String,
}

impl ApiKeyConfig {
    pub fn new(valid_key: &str) -> Self {
        Self {
            key_hash: hash_key(valid_key),
        }
    }

    /// Whether `candidate` is the configured key.
    ///
    /// Compares fixed-length digests rather than the raw strings.
    pub fn matches(&self, candidate: &str) -> bool {
        hash_key(candidate) == self.key_hash
    }
}

/// Hex-encoded SHA-256 of an API key.
fn hash_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());

    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_only_the_configured_key() {
        let config = ApiKeyConfig::new("12345");
        assert!(config.matches("12345"));
        assert!(!config.matches("1234"));
        assert!(!config.matches("123456"));
        assert!(!config.matches(" 12345"));
    }

    #[test]
    fn stores_a_hex_digest() {
        let config = ApiKeyConfig::new("12345");
        assert_eq!(config.key_hash.len(), 64);
        assert_ne!(config.key_hash, "12345");
    }
}
