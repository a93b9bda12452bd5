//! Connection settings for a confish client.

use std::fmt;

use super::error::{ConfigError, field};

/// Settings identifying the service and the calling application.
///
/// Owned by a [`ConfishClient`](crate::client::ConfishClient) once the
/// client is built; the client only hands out shared references, so the
/// values cannot change for the client's lifetime.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service base URL, e.g. `https://confish.example.com`
    pub base_url: String,

    /// Application identifier, sent as `App-ID`
    pub app_id: String,

    /// Application secret, sent as `App-Secret`
    pub app_secret: String,

    /// Route the caller serves webhooks on.
    ///
    /// Stored for the caller's convenience; no client operation reads it.
    pub webhook_path: Option<String>,
}

impl ClientConfig {
    /// Creates settings with no webhook path.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            webhook_path: None,
        }
    }

    /// Sets the webhook path.
    #[must_use]
    pub fn with_webhook_path(mut self, path: impl Into<String>) -> Self {
        self.webhook_path = Some(path.into());
        self
    }

    /// Returns the webhook path, if one was configured.
    #[must_use]
    pub fn webhook_path(&self) -> Option<&str> {
        self.webhook_path.as_deref()
    }

    /// Checks that the base URL, app id and app secret are all non-empty.
    ///
    /// Fields are checked in that order and the first empty one is reported.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] naming the empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::missing(
                field::URL,
                "The service base URL cannot be empty",
            ));
        }

        if self.app_id.is_empty() {
            return Err(ConfigError::missing(
                field::APP_ID,
                "The application ID cannot be empty",
            ));
        }

        if self.app_secret.is_empty() {
            return Err(ConfigError::missing(
                field::APP_SECRET,
                "The application secret cannot be empty",
            ));
        }

        Ok(())
    }
}

// The secret never appears in logs or panic messages.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("app_secret", &"<redacted>")
            .field("webhook_path", &self.webhook_path)
            .finish()
    }
}
