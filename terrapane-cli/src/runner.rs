//! CLI runner for common setup and operations.
//!
//! Encapsulates configuration loading, logging initialization, and geocoder
//! construction to reduce duplication across command handlers.

use tracing::info;

use terrapane::config::{ConfigFile, DEFAULT_LOG_FILE_NAME};
use terrapane::geocode::{GeocoderConfig, MapboxGeocoder};
use terrapane::logging::{init_logging, LoggingGuard};

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while the runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner with optional debug logging.
    ///
    /// When stdout is a TTY, stdout logging is disabled to prevent
    /// interference with the TUI.
    pub fn with_debug(debug_mode: bool) -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let config = ConfigFile::load()?;

        let log_path = &config.logging.file;
        let log_dir = log_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| std::path::PathBuf::from("."));
        let log_file = log_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string());

        // Disable stdout logging when running in a TTY since the TUI will
        // take over the screen.
        let stdout_enabled = !atty::is(atty::Stream::Stdout);

        let logging_guard = init_logging(&log_dir, &log_file, stdout_enabled, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("Terrapane v{}", terrapane::VERSION);
        info!("Terrapane CLI: {} command", command);
    }

    /// Build the geocoding client from configuration.
    ///
    /// Fails early with token guidance when no credential is configured.
    pub fn geocoder(&self) -> Result<MapboxGeocoder, CliError> {
        let config = GeocoderConfig::from(&self.config.geocoding);
        MapboxGeocoder::new(config).map_err(CliError::Geocode)
    }
}
