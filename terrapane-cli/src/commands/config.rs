//! The `config` command: configuration management.

use terrapane::config::{config_file_path, ConfigFile};

use crate::error::CliError;
use crate::ConfigAction;

pub fn handle(action: &ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Path => {
            println!("{}", config_file_path().display());
            Ok(())
        }
        ConfigAction::Init => {
            let path = ConfigFile::ensure_exists()?;
            println!("Configuration file: {}", path.display());
            Ok(())
        }
        ConfigAction::Show => {
            let config = ConfigFile::load()?;

            println!("[geocoding]");
            println!("endpoint = {}", config.geocoding.endpoint);
            println!(
                "access_token = {}",
                config
                    .geocoding
                    .access_token
                    .as_deref()
                    .map(mask_token)
                    .unwrap_or_else(|| "(not set)".to_string())
            );
            println!("timeout = {}", config.geocoding.timeout);
            println!();
            println!("[logging]");
            println!("file = {}", config.logging.file.display());
            Ok(())
        }
    }
}

/// Mask a credential for display, keeping just enough to recognize it.
fn mask_token(token: &str) -> String {
    if token.chars().count() <= 8 {
        return "********".to_string();
    }
    let prefix: String = token.chars().take(8).collect();
    format!("{}…", prefix)
}
