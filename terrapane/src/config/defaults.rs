//! Default values for all configuration settings.

use super::file::config_directory;
use super::settings::{ConfigFile, GeocodingSettings, LoggingSettings};
use crate::geocode::{DEFAULT_GEOCODE_TIMEOUT_SECS, DEFAULT_GEOCODING_ENDPOINT};

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "terrapane.log";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            geocoding: GeocodingSettings {
                endpoint: DEFAULT_GEOCODING_ENDPOINT.to_string(),
                access_token: None,
                timeout: DEFAULT_GEOCODE_TIMEOUT_SECS,
            },
            logging: LoggingSettings {
                file: config_directory().join(DEFAULT_LOG_FILE_NAME),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert_eq!(config.geocoding.endpoint, DEFAULT_GEOCODING_ENDPOINT);
        assert!(config.geocoding.access_token.is_none());
        assert_eq!(config.geocoding.timeout, DEFAULT_GEOCODE_TIMEOUT_SECS);
        assert!(config
            .logging
            .file
            .to_string_lossy()
            .ends_with(DEFAULT_LOG_FILE_NAME));
    }
}
