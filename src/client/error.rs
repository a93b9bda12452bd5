//! Error type for client operations.

use thiserror::Error;

use crate::config::ConfigError;
use crate::transport::HttpError;

/// Error returned by every [`ConfishClient`](super::ConfishClient) operation.
///
/// None of these are retried by the client; the caller decides.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client could not be constructed from its configuration.
    #[error("Invalid client configuration: {0}")]
    Config(#[from] ConfigError),

    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with a status the operation does not accept.
    #[error("Unexpected HTTP status {status}: {body}")]
    Http {
        /// Status code returned by the server
        status: http::StatusCode,
        /// Response body, verbatim (lossy UTF-8, possibly empty)
        body: String,
    },

    /// An outbound body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// An inbound body did not match the requested shape.
    #[error("Failed to decode JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// A webhook carried an event other than `configuration.updated`.
    #[error("Unsupported webhook event: {event}")]
    UnsupportedEvent {
        /// The event name received
        event: String,
    },
}

impl ClientError {
    /// Returns the HTTP status for [`ClientError::Http`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the error came from client construction.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
