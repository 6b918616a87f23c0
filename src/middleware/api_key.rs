//! API key gate middleware.
//!
//! This middleware intercepts every request to the gated router to:
//! 1. Read the `api_key` query parameter
//! 2. Compare it against the configured key
//! 3. Either hand the request to the next handler or answer with a rejection message

use crate::{error::ApiKeyError, models::api_key::ApiKeyConfig};
use axum::{
    extract::{Query, Request, State},
    http::Uri,
    middleware::Next,
    response::Response,
};

/// Name of the query parameter carrying the key.
pub const API_KEY_PARAM: &str = "api_key";

/// Outcome of checking a request's API key.
///
/// The middleware only continues the chain on `Allow`; there is no implicit fallthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Allow,
    Reject(ApiKeyError),
}

/// Decide whether a request carrying the given `api_key` values may proceed.
///
/// No value, or a single empty one, counts as a missing key. More than one
/// value is never equal to the configured key and is rejected as invalid.
pub fn check_api_key(config: &ApiKeyConfig, api_keys: &[String]) -> Gate {
    match api_keys {
        [] => Gate::Reject(ApiKeyError::MissingApiKey),
        [key] if key.is_empty() => Gate::Reject(ApiKeyError::MissingApiKey),
        [key] if config.matches(key) => Gate::Allow,
        _ => Gate::Reject(ApiKeyError::InvalidApiKey),
    }
}

/// Every `api_key` value in a request URI, in order of appearance.
///
/// Percent-decoding is lossy: a malformed escape such as `%ZZ` is kept
/// verbatim, so it is compared like any other key.
pub fn api_key_values(uri: &Uri) -> Vec<String> {
    let Ok(Query(pairs)) = Query::<Vec<(String, String)>>::try_from_uri(uri) else {
        return Vec::new();
    };

    pairs
        .into_iter()
        .filter(|(name, _)| name == API_KEY_PARAM)
        .map(|(_, value)| value)
        .collect()
}

/// API key gate middleware function.
///
/// # Flow
///
/// 1. Extract every `?api_key=<key>` from the request URI
/// 2. Run [`check_api_key`] against the configured key
/// 3. `Gate::Allow`: call the next handler
/// 4. `Gate::Reject`: return the rejection message without calling the handler
///
/// # Arguments
///
/// * `State(config)` - Accepted key, injected by Axum
/// * `request` - Incoming HTTP request
/// * `next` - Next middleware/handler in the chain
pub async fn api_key_middleware(
    State(config): State<ApiKeyConfig>,
    request: Request,
    next: Next,
) -> Result<Response, ApiKeyError> {
    let api_keys = api_key_values(request.uri());

    match check_api_key(&config, &api_keys) {
        Gate::Allow => Ok(next.run(request).await),
        Gate::Reject(error) => {
            // Never log the presented key itself
            tracing::warn!(path = %request.uri().path(), reason = %error, "Rejected request");
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(s: &str) -> Uri {
        s.parse().unwrap()
    }

    fn keys(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn missing_key_is_rejected() {
        let config = ApiKeyConfig::new("12345");
        assert_eq!(
            check_api_key(&config, &[]),
            Gate::Reject(ApiKeyError::MissingApiKey)
        );
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let config = ApiKeyConfig::new("12345");
        assert_eq!(
            check_api_key(&config, &keys(&[""])),
            Gate::Reject(ApiKeyError::MissingApiKey)
        );
    }

    #[test]
    fn wrong_key_is_rejected() {
        let config = ApiKeyConfig::new("12345");
        assert_eq!(
            check_api_key(&config, &keys(&["wrong"])),
            Gate::Reject(ApiKeyError::InvalidApiKey)
        );
    }

    #[test]
    fn configured_key_is_allowed() {
        let config = ApiKeyConfig::new("12345");
        assert_eq!(check_api_key(&config, &keys(&["12345"])), Gate::Allow);
    }

    #[test]
    fn repeated_key_is_rejected_even_when_one_matches() {
        let config = ApiKeyConfig::new("12345");
        assert_eq!(
            check_api_key(&config, &keys(&["wrong", "12345"])),
            Gate::Reject(ApiKeyError::InvalidApiKey)
        );
        assert_eq!(
            check_api_key(&config, &keys(&["12345", "12345"])),
            Gate::Reject(ApiKeyError::InvalidApiKey)
        );
        assert_eq!(
            check_api_key(&config, &keys(&["", ""])),
            Gate::Reject(ApiKeyError::InvalidApiKey)
        );
    }

    #[test]
    fn substituted_key_replaces_the_default() {
        let config = ApiKeyConfig::new("s3cret");
        assert_eq!(check_api_key(&config, &keys(&["s3cret"])), Gate::Allow);
        assert_eq!(
            check_api_key(&config, &keys(&["12345"])),
            Gate::Reject(ApiKeyError::InvalidApiKey)
        );
    }

    #[test]
    fn reads_key_from_query_string() {
        assert_eq!(api_key_values(&uri("/demo?api_key=12345")), keys(&["12345"]));
        assert_eq!(
            api_key_values(&uri("/demo?foo=bar&api_key=abc")),
            keys(&["abc"])
        );
    }

    #[test]
    fn absent_query_yields_no_values() {
        assert!(api_key_values(&uri("/demo")).is_empty());
        assert!(api_key_values(&uri("/demo?other=1")).is_empty());
    }

    #[test]
    fn percent_encoding_is_decoded() {
        assert_eq!(api_key_values(&uri("/demo?api_key=a%20b")), keys(&["a b"]));
    }

    #[test]
    fn malformed_escape_is_kept_verbatim() {
        let values = api_key_values(&uri("/demo?api_key=%ZZ"));
        assert_eq!(values, keys(&["%ZZ"]));
        assert_eq!(
            check_api_key(&ApiKeyConfig::new("12345"), &values),
            Gate::Reject(ApiKeyError::InvalidApiKey)
        );
    }

    #[test]
    fn repeated_parameter_keeps_every_value() {
        assert_eq!(
            api_key_values(&uri("/demo?api_key=wrong&api_key=12345")),
            keys(&["wrong", "12345"])
        );
    }
}
