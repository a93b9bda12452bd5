//! Validated configuration after merging CLI and TOML sources.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use super::cli::Cli;
use super::error::{ConfigError, field};
use super::service::ClientConfig;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the binary.
///
/// Use [`ValidatedConfig::from_raw`] to merge CLI args with an optional TOML
/// config. Explicit CLI values always take precedence over the file.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Client connection settings (already validated)
    pub client: ClientConfig,

    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timeout_str = self
            .timeout
            .map_or_else(|| "none".to_string(), |t| format!("{}s", t.as_secs()));

        write!(
            f,
            "Config {{ url: {}, app_id: {}, webhook_path: {}, timeout: {} }}",
            self.client.base_url,
            self.client.app_id,
            self.client.webhook_path().unwrap_or("none"),
            timeout_str,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `url`, `app_id` or `app_secret` is missing or empty
    /// - `timeout` is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let service = toml.map(|t| &t.service);

        let base_url = cli
            .url
            .as_deref()
            .or_else(|| service.and_then(|s| s.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(field::URL, "Use --url or set service.url in config file")
            })?;

        let app_id = cli
            .app_id
            .as_deref()
            .or_else(|| service.and_then(|s| s.app_id.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::APP_ID,
                    "Use --app-id or set service.app_id in config file",
                )
            })?;

        let app_secret = cli
            .app_secret
            .as_deref()
            .or_else(|| service.and_then(|s| s.app_secret.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::APP_SECRET,
                    "Use --app-secret, CONFISH_APP_SECRET or set service.app_secret in config file",
                )
            })?;

        let webhook_path = cli
            .webhook_path
            .clone()
            .or_else(|| service.and_then(|s| s.webhook_path.clone()));

        let client = ClientConfig {
            base_url: base_url.to_string(),
            app_id: app_id.to_string(),
            app_secret: app_secret.to_string(),
            webhook_path,
        };
        client.validate()?;

        let timeout = Self::resolve_timeout(cli, toml)?;

        Ok(Self {
            client,
            timeout,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_timeout(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<Duration>, ConfigError> {
        let Some(seconds) = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.service.timeout))
        else {
            return Ok(None);
        };

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Some(Duration::from_secs(seconds)))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
