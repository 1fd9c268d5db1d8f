//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file. These are
//! pure data types; parsing lives in [`super::parser`] and serialization in
//! [`super::writer`].

use std::path::PathBuf;
use std::time::Duration;

use crate::geocode::GeocoderConfig;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// Geocoding settings
    pub geocoding: GeocodingSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Geocoding configuration.
#[derive(Debug, Clone)]
pub struct GeocodingSettings {
    /// Base URL of the geocoding API.
    pub endpoint: String,
    /// Access token for the geocoding API. No default; supplied via the
    /// config file or the `TERRAPANE_ACCESS_TOKEN` environment variable.
    pub access_token: Option<String>,
    /// HTTP timeout in seconds for geocoding requests.
    pub timeout: u64,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Log file path.
    pub file: PathBuf,
}

impl From<&GeocodingSettings> for GeocoderConfig {
    fn from(settings: &GeocodingSettings) -> Self {
        GeocoderConfig {
            endpoint: settings.endpoint.clone(),
            access_token: settings.access_token.clone(),
            timeout: Duration::from_secs(settings.timeout),
        }
    }
}
