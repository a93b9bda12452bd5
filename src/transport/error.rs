//! Error types for the transport layer.

use thiserror::Error;

/// Failure to obtain any HTTP response at all.
///
/// A response with a non-success status is not an `HttpError`; status
/// interpretation belongs to the caller.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request could not reach the server.
    ///
    /// Covers DNS resolution, refused connections, TLS handshakes and
    /// failures while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The transport's timeout elapsed before a response arrived.
    #[error("Request timed out")]
    Timeout,

    /// The request URL could not be built or was rejected by the transport.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl HttpError {
    /// Wraps an arbitrary error as a connection failure.
    pub fn connection<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connection(Box::new(source))
    }
}
