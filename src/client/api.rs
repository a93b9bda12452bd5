//! The confish service client.

use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::codec;
use crate::config::defaults;
use crate::config::{ClientConfig, ConfigError};
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestClient};

use super::webhook::{self, WebhookPayload};
use super::{ClientError, LogLevel, LogPayload};

/// Statuses accepted when fetching a configuration.
const FETCH_ACCEPTED: &[StatusCode] = &[StatusCode::OK];

/// Statuses accepted when submitting a log message.
const LOG_ACCEPTED: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];

/// Client for the confish configuration and logging service.
///
/// Every request carries the `App-ID`, `App-Secret` and
/// `Content-Type: application/json` headers. Each operation sends at most
/// one request; nothing is retried or cached, and the client holds no
/// mutable state, so a single instance can be shared freely between tasks.
///
/// # Type Parameters
///
/// - `H`: The transport (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use confish::client::ConfishClient;
/// use confish::config::ClientConfig;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Flags {
///     feature_enabled: bool,
/// }
///
/// # async fn example() -> Result<(), confish::client::ClientError> {
/// let client = ConfishClient::new(ClientConfig::new(
///     "https://confish.example.com",
///     "app-123",
///     "s3cret",
/// ))?;
///
/// let flags: Flags = client.get_config("flags").await?;
/// if flags.feature_enabled {
///     client.info("feature enabled").await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConfishClient<H = ReqwestClient> {
    config: ClientConfig,
    headers: HeaderMap,
    http: H,
}

impl ConfishClient<ReqwestClient> {
    /// Creates a client using reqwest with its default settings.
    ///
    /// No network I/O happens here.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the base URL, app id or app secret
    /// is empty, or a credential is not a valid header value.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Self::with_http_client(config, ReqwestClient::new())
    }
}

impl<H> ConfishClient<H> {
    /// Creates a client sending requests through `http`.
    ///
    /// # Errors
    ///
    /// Same as [`ConfishClient::new`].
    pub fn with_http_client(config: ClientConfig, http: H) -> Result<Self, ClientError> {
        config.validate()?;
        let headers = auth_headers(&config)?;

        Ok(Self {
            config,
            headers,
            http,
        })
    }

    /// Returns the configuration the client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub const fn http_client(&self) -> &H {
        &self.http
    }

    /// Decodes the values of a `configuration.updated` webhook into `T`.
    ///
    /// Pure: performs no I/O and leaves the client untouched. The
    /// configuration name is not checked.
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnsupportedEvent`] for any other event
    /// - [`ClientError::Decode`] if the values do not match `T`
    pub fn process_webhook_payload<T: DeserializeOwned>(
        &self,
        payload: &WebhookPayload,
    ) -> Result<T, ClientError> {
        webhook::process_payload(payload)
    }

    /// Appends `segments` to the base URL path, percent-encoding each one.
    ///
    /// A `/` inside a segment is encoded rather than splitting the path, and
    /// `.`/`..` segments are rejected so the requested path is always the
    /// one named by the caller.
    fn url(&self, segments: &[&str]) -> Result<url::Url, ClientError> {
        let base = &self.config.base_url;
        let invalid = |reason: String| ClientError::from(HttpError::InvalidUrl(reason));

        if let Some(segment) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(invalid(format!("path segment '{segment}' is not allowed")));
        }

        let mut url = url::Url::parse(base).map_err(|e| invalid(format!("{base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| invalid(format!("{base}: cannot be a base URL")))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn config_url(&self, config_id: &str) -> Result<url::Url, ClientError> {
        self.url(&["c", config_id])
    }

    fn log_url(&self) -> Result<url::Url, ClientError> {
        self.url(&["a", &self.config.app_id, "log"])
    }
}

impl<H: HttpClient> ConfishClient<H> {
    /// Fetches configuration `config_id` and decodes it into `T`.
    ///
    /// Sends `GET {base_url}/c/{config_id}`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] if no response was received
    /// - [`ClientError::Http`] for any status other than 200
    /// - [`ClientError::Decode`] if the body does not match `T`
    pub async fn get_config<T: DeserializeOwned>(
        &self,
        config_id: &str,
    ) -> Result<T, ClientError> {
        let request = HttpRequest::get(self.config_url(config_id)?);
        let response = self.send(request, FETCH_ACCEPTED).await?;

        codec::decode(&response.body)
    }

    /// Fetches configuration `config_id` without a fixed shape.
    ///
    /// # Errors
    ///
    /// Same as [`ConfishClient::get_config`].
    pub async fn get_config_value(
        &self,
        config_id: &str,
    ) -> Result<serde_json::Value, ClientError> {
        self.get_config(config_id).await
    }

    /// Sends a log message.
    ///
    /// Sends `POST {base_url}/a/{app_id}/log` with body
    /// `{"level": ..., "message": ...}`. Both 200 and 201 count as success.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Encode`] if the body cannot be serialized
    /// - [`ClientError::Transport`] if no response was received
    /// - [`ClientError::Http`] for any status other than 200 or 201
    pub async fn log(
        &self,
        level: LogLevel,
        message: impl Into<String>,
    ) -> Result<(), ClientError> {
        let body = codec::encode(&LogPayload::new(level, message))?;
        let request = HttpRequest::post(self.log_url()?).with_body(body);

        self.send(request, LOG_ACCEPTED).await.map(drop)
    }

    /// Sends a log message; identical to [`ConfishClient::log`].
    ///
    /// Kept for callers written against the older API.
    ///
    /// # Errors
    ///
    /// Same as [`ConfishClient::log`].
    pub async fn log_with_url(
        &self,
        level: LogLevel,
        message: impl Into<String>,
    ) -> Result<(), ClientError> {
        self.log(level, message).await
    }

    /// Sends a message at [`LogLevel::Debug`].
    ///
    /// # Errors
    ///
    /// Same as [`ConfishClient::log`].
    pub async fn debug(&self, message: impl Into<String>) -> Result<(), ClientError> {
        self.log(LogLevel::Debug, message).await
    }

    /// Sends a message at [`LogLevel::Info`].
    ///
    /// # Errors
    ///
    /// Same as [`ConfishClient::log`].
    pub async fn info(&self, message: impl Into<String>) -> Result<(), ClientError> {
        self.log(LogLevel::Info, message).await
    }

    /// Sends a message at [`LogLevel::Warn`].
    ///
    /// # Errors
    ///
    /// Same as [`ConfishClient::log`].
    pub async fn warn(&self, message: impl Into<String>) -> Result<(), ClientError> {
        self.log(LogLevel::Warn, message).await
    }

    /// Sends a message at [`LogLevel::Error`].
    ///
    /// # Errors
    ///
    /// Same as [`ConfishClient::log`].
    pub async fn error(&self, message: impl Into<String>) -> Result<(), ClientError> {
        self.log(LogLevel::Error, message).await
    }

    /// Sends a message at [`LogLevel::Critical`].
    ///
    /// # Errors
    ///
    /// Same as [`ConfishClient::log`].
    pub async fn critical(&self, message: impl Into<String>) -> Result<(), ClientError> {
        self.log(LogLevel::Critical, message).await
    }

    /// Attaches the auth headers, sends one request and checks the status.
    async fn send(
        &self,
        request: HttpRequest,
        accepted: &[StatusCode],
    ) -> Result<HttpResponse, ClientError> {
        let request = request.with_headers(&self.headers);
        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        let response = self.http.request(request).await?;
        tracing::debug!(status = %response.status, "Received response");

        if response.has_status(accepted) {
            return Ok(response);
        }

        let body = response.body_lossy();
        tracing::warn!(status = %response.status, body = %body, "Request rejected by server");

        Err(ClientError::Http {
            status: response.status,
            body,
        })
    }
}

fn auth_headers(config: &ClientConfig) -> Result<HeaderMap, ConfigError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(defaults::APP_ID_HEADER),
        header_value(defaults::APP_ID_HEADER, &config.app_id)?,
    );

    let mut secret = header_value(defaults::APP_SECRET_HEADER, &config.app_secret)?;
    secret.set_sensitive(true);
    headers.insert(HeaderName::from_static(defaults::APP_SECRET_HEADER), secret);

    headers.insert(CONTENT_TYPE, HeaderValue::from_static(defaults::CONTENT_TYPE));
    Ok(headers)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeaderValue {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
