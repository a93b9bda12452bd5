//! Tests for webhook payload decoding.

use serde::Deserialize;

use super::{ClientError, WebhookPayload, process_payload};

#[derive(Debug, Deserialize, PartialEq)]
struct Toggles {
    feature_toggle: bool,
}

fn payload(event: &str, values: &str) -> WebhookPayload {
    let body = format!(
        r#"{{"event":"{event}","configuration":{{"name":"app-settings","values":{values}}}}}"#
    );
    WebhookPayload::from_slice(body.as_bytes()).unwrap()
}

mod from_slice {
    use super::*;

    #[test]
    fn decodes_inbound_body() {
        let payload = payload("configuration.updated", r#"{"feature_toggle":true}"#);

        assert_eq!(payload.event, "configuration.updated");
        assert_eq!(payload.configuration.name, "app-settings");
        assert_eq!(
            payload.configuration.values.get(),
            r#"{"feature_toggle":true}"#
        );
        assert!(payload.is_configuration_update());
    }

    #[test]
    fn missing_configuration_is_decode_error() {
        let result = WebhookPayload::from_slice(br#"{"event":"configuration.updated"}"#);

        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let result = WebhookPayload::from_slice(b"event=configuration.updated");

        assert!(matches!(result, Err(ClientError::Decode(_))));
    }
}

mod process {
    use super::*;

    #[test]
    fn configuration_update_decodes_values() {
        let payload = payload("configuration.updated", r#"{"feature_toggle":true}"#);

        let toggles: Toggles = process_payload(&payload).unwrap();

        assert_eq!(
            toggles,
            Toggles {
                feature_toggle: true
            }
        );
    }

    #[test]
    fn other_event_is_rejected() {
        let payload = payload("other", r#"{"feature_toggle":true}"#);

        let result: Result<Toggles, _> = process_payload(&payload);

        assert!(matches!(
            result,
            Err(ClientError::UnsupportedEvent { ref event }) if event == "other"
        ));
    }

    #[test]
    fn other_event_is_rejected_before_decoding_values() {
        // Values that would fail to decode must not mask the event error.
        let payload = payload("configuration.deleted", "[1,2,3]");

        let result: Result<Toggles, _> = process_payload(&payload);

        assert!(matches!(result, Err(ClientError::UnsupportedEvent { .. })));
    }

    #[test]
    fn event_match_is_exact() {
        let payload = payload("Configuration.Updated", r#"{"feature_toggle":true}"#);

        let result: Result<Toggles, _> = process_payload(&payload);

        assert!(matches!(result, Err(ClientError::UnsupportedEvent { .. })));
    }

    #[test]
    fn shape_mismatch_is_decode_error() {
        let payload = payload("configuration.updated", r#"{"feature_toggle":"on"}"#);

        let result: Result<Toggles, _> = process_payload(&payload);

        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[test]
    fn repeated_processing_gives_same_result() {
        let payload = payload(
            "configuration.updated",
            r#"{"feature_toggle":false,"extra":1}"#,
        );

        let first: serde_json::Value = process_payload(&payload).unwrap();
        let second: serde_json::Value = process_payload(&payload).unwrap();

        assert_eq!(first, second);
        assert_eq!(first["feature_toggle"], false);
    }

    #[test]
    fn configuration_name_is_ignored() {
        let body = br#"{"event":"configuration.updated",
            "configuration":{"name":"","values":{"feature_toggle":true}}}"#;
        let payload = WebhookPayload::from_slice(body).unwrap();

        let toggles: Toggles = process_payload(&payload).unwrap();

        assert!(toggles.feature_toggle);
    }

    #[test]
    fn null_values_do_not_decode_into_struct() {
        let payload = payload("configuration.updated", "null");

        let result: Result<Toggles, _> = process_payload(&payload);

        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[test]
    fn null_values_decode_into_option_as_none() {
        let payload = payload("configuration.updated", "null");

        let toggles: Option<Toggles> = process_payload(&payload).unwrap();

        assert_eq!(toggles, None);
    }
}
