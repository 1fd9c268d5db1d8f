//! Configuration file handling for ~/.terrapane/config.ini.
//!
//! Loads and saves user configuration with sensible defaults. Settings
//! structs live in [`super::settings`], parsing in [`super::parser`], and
//! serialization in [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use super::settings::ConfigFile;

/// Environment variable that overrides `geocoding.access_token`.
pub const ACCESS_TOKEN_ENV: &str = "TERRAPANE_ACCESS_TOKEN";

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.terrapane/config.ini),
    /// applying environment overrides.
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = config_file_path();
        Ok(Self::load_from(&path)?.with_env_overrides())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults. Environment overrides
    /// are NOT applied here, so tests stay deterministic.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Apply environment variable overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_access_token_override(std::env::var(ACCESS_TOKEN_ENV).ok())
    }

    fn with_access_token_override(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.geocoding.access_token = Some(token);
        }
        self
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Create the default config file if it doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
        }
        Ok(path)
    }
}

/// Get the path to the config directory (~/.terrapane).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".terrapane")
}

/// Get the path to the config file (~/.terrapane/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = ConfigFile::load_from(&config_path).unwrap();
        let default = ConfigFile::default();

        assert_eq!(config.geocoding.endpoint, default.geocoding.endpoint);
        assert_eq!(config.geocoding.timeout, default.geocoding.timeout);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.geocoding.access_token = Some("pk.saved".to_string());
        config.save_to(&config_path).unwrap();

        let reloaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(reloaded.geocoding.access_token.as_deref(), Some("pk.saved"));
    }

    #[test]
    fn test_env_override_wins_over_file_value() {
        let config = ConfigFile {
            geocoding: crate::config::GeocodingSettings {
                access_token: Some("pk.from-file".to_string()),
                ..ConfigFile::default().geocoding
            },
            ..ConfigFile::default()
        };

        let overridden = config
            .clone()
            .with_access_token_override(Some("pk.from-env".to_string()));
        assert_eq!(
            overridden.geocoding.access_token.as_deref(),
            Some("pk.from-env")
        );

        // Absent or blank env value leaves the file value in place.
        let untouched = config
            .clone()
            .with_access_token_override(None)
            .with_access_token_override(Some("  ".to_string()));
        assert_eq!(
            untouched.geocoding.access_token.as_deref(),
            Some("pk.from-file")
        );
    }

    #[test]
    fn test_config_paths() {
        assert!(config_directory().ends_with(".terrapane"));
        assert!(config_file_path().ends_with(".terrapane/config.ini"));
    }
}
