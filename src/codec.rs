//! JSON encoding and decoding for request and response bodies.
//!
//! Results are decoded into whatever type the caller asks for; the codec
//! itself knows nothing about the shape of a configuration.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::ClientError;

/// Serializes an outbound body to JSON bytes.
///
/// # Errors
///
/// Returns [`ClientError::Encode`] if `value` cannot be represented as JSON.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, ClientError> {
    serde_json::to_vec(value).map_err(ClientError::Encode)
}

/// Deserializes a JSON body into `T`.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] if `bytes` is not valid JSON or does not
/// match the shape of `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice(bytes).map_err(ClientError::Decode)
}

/// Deserializes a JSON string into `T`.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] on invalid JSON or a shape mismatch.
pub fn decode_str<T: DeserializeOwned>(text: &str) -> Result<T, ClientError> {
    serde_json::from_str(text).map_err(ClientError::Decode)
}
