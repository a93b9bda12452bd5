//! TOML configuration file parsing.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional so a file can be combined with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Service connection section
    #[serde(default)]
    pub service: ServiceSection,
}

/// Service connection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    /// Service base URL
    pub url: Option<String>,

    /// Application identifier
    pub app_id: Option<String>,

    /// Application secret
    pub app_secret: Option<String>,

    /// Webhook route served by the application
    pub webhook_path: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# confish client configuration

[service]
# Service base URL (required)
# url = "https://confish.example.com"

# Application credentials (required)
# The secret may also be supplied through CONFISH_APP_SECRET.
# app_id = "your-app-id"
# app_secret = "your-app-secret"

# Route your application serves webhooks on (informational)
# webhook_path = "/webhooks/confish"

# Request timeout in seconds (default: none)
# timeout = 30
"#
    .to_string()
}
