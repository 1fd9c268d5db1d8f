//! Serialization of `ConfigFile` → INI text.

use super::settings::ConfigFile;

/// Render the configuration as a commented INI string.
///
/// Unset values are written as commented-out keys so a freshly generated
/// file documents what can be configured.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let mut out = String::new();

    out.push_str("# Terrapane configuration\n");
    out.push('\n');
    out.push_str("[geocoding]\n");
    out.push_str(&format!("endpoint = {}\n", config.geocoding.endpoint));
    match &config.geocoding.access_token {
        Some(token) => out.push_str(&format!("access_token = {}\n", token)),
        None => {
            out.push_str("# Required. May also be set via TERRAPANE_ACCESS_TOKEN.\n");
            out.push_str("# access_token = pk.your-token-here\n");
        }
    }
    out.push_str(&format!("timeout = {}\n", config.geocoding.timeout));
    out.push('\n');
    out.push_str("[logging]\n");
    out.push_str(&format!("file = {}\n", config.logging.file.display()));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ini::Ini;

    #[test]
    fn test_roundtrip_through_parser() {
        let mut config = ConfigFile::default();
        config.geocoding.access_token = Some("pk.roundtrip".to_string());
        config.geocoding.timeout = 15;

        let text = to_config_string(&config);
        let ini = Ini::load_from_str(&text).unwrap();
        let parsed = super::super::parser::parse_ini(&ini).unwrap();

        assert_eq!(parsed.geocoding.endpoint, config.geocoding.endpoint);
        assert_eq!(parsed.geocoding.access_token.as_deref(), Some("pk.roundtrip"));
        assert_eq!(parsed.geocoding.timeout, 15);
        assert_eq!(parsed.logging.file, config.logging.file);
    }

    #[test]
    fn test_unset_token_written_as_comment() {
        let text = to_config_string(&ConfigFile::default());

        assert!(text.contains("# access_token"));
        assert!(!text.contains("\naccess_token ="));
    }
}
