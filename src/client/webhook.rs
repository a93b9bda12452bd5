//! Inbound webhook payloads announcing configuration changes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::codec;

use super::ClientError;

/// The only webhook event the client understands.
pub const CONFIGURATION_UPDATED: &str = "configuration.updated";

/// A decoded webhook body.
///
/// Wire shape: `{"event": string, "configuration": {"name": string, "values": <any JSON>}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Event name, e.g. `configuration.updated`
    pub event: String,
    /// The configuration the event refers to
    pub configuration: ConfigurationObject,
}

/// A named configuration whose values stay as raw JSON until decoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationObject {
    /// Configuration name
    pub name: String,
    /// Unparsed configuration values
    pub values: Box<RawValue>,
}

impl WebhookPayload {
    /// Decodes a raw inbound webhook body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] if the body does not have the webhook shape.
    pub fn from_slice(body: &[u8]) -> Result<Self, ClientError> {
        codec::decode(body)
    }

    /// Returns true if this is a `configuration.updated` event.
    #[must_use]
    pub fn is_configuration_update(&self) -> bool {
        self.event == CONFIGURATION_UPDATED
    }
}

/// Decodes the configuration values of a `configuration.updated` webhook.
///
/// Performs no I/O; the same payload always yields the same result.
///
/// # Errors
///
/// - [`ClientError::UnsupportedEvent`] if the event is anything else; nothing
///   is decoded in that case
/// - [`ClientError::Decode`] if the values do not match `T`
pub fn process_payload<T: DeserializeOwned>(payload: &WebhookPayload) -> Result<T, ClientError> {
    if !payload.is_configuration_update() {
        return Err(ClientError::UnsupportedEvent {
            event: payload.event.clone(),
        });
    }

    tracing::debug!(
        configuration = %payload.configuration.name,
        "Decoding configuration update"
    );

    codec::decode_str(payload.configuration.values.get())
}
