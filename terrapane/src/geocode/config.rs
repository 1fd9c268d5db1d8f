//! Configuration for the geocoding client.

use std::time::Duration;

/// Default geocoding API base URL.
pub const DEFAULT_GEOCODING_ENDPOINT: &str = "https://api.mapbox.com";

/// Default HTTP timeout for geocoding requests.
pub const DEFAULT_GEOCODE_TIMEOUT_SECS: u64 = 10;

/// Configuration for a geocoding client.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL of the geocoding API.
    pub endpoint: String,

    /// Access token for the API. Required; there is deliberately no default.
    pub access_token: Option<String>,

    /// HTTP request timeout.
    pub timeout: Duration,
}

impl GeocoderConfig {
    /// Creates a config with the default endpoint and the given token.
    pub fn with_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            ..Self::default()
        }
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GEOCODING_ENDPOINT.to_string(),
            access_token: None,
            timeout: Duration::from_secs(DEFAULT_GEOCODE_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_token() {
        let config = GeocoderConfig::default();
        assert_eq!(config.endpoint, DEFAULT_GEOCODING_ENDPOINT);
        assert!(config.access_token.is_none());
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_with_token() {
        let config = GeocoderConfig::with_token("pk.test");
        assert_eq!(config.access_token.as_deref(), Some("pk.test"));
    }
}
