//! Application configuration.
//!
//! INI-format config file at `~/.terrapane/config.ini` with a `[geocoding]`
//! section (endpoint, access token, timeout) and a `[logging]` section.
//! A missing file yields defaults; `TERRAPANE_ACCESS_TOKEN` overrides the
//! file's access token so the credential never has to live on disk.

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::DEFAULT_LOG_FILE_NAME;
pub use file::{config_directory, config_file_path, ConfigFileError, ACCESS_TOKEN_ENV};
pub use settings::{ConfigFile, GeocodingSettings, LoggingSettings};
