//! Tests for `LogLevel` and `LogPayload`.

use super::{LogLevel, LogPayload, UnknownLogLevel};

mod log_level {
    use super::*;

    #[test]
    fn serializes_as_lowercase_name() {
        let names: Vec<String> = LogLevel::ALL
            .iter()
            .map(|level| serde_json::to_string(level).unwrap())
            .collect();

        assert_eq!(
            names,
            [
                "\"debug\"",
                "\"info\"",
                "\"warn\"",
                "\"error\"",
                "\"critical\""
            ]
        );
    }

    #[test]
    fn display_and_parse_agree() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("Critical".parse::<LogLevel>(), Ok(LogLevel::Critical));
    }

    #[test]
    fn parse_rejects_unknown_name() {
        let err = "fatal".parse::<LogLevel>().unwrap_err();

        assert_eq!(err, UnknownLogLevel("fatal".to_string()));
        assert!(err.to_string().contains("fatal"));
    }

    #[test]
    fn deserialize_rejects_unknown_name() {
        let result: Result<LogLevel, _> = serde_json::from_str("\"trace\"");
        assert!(result.is_err());
    }
}

mod log_payload {
    use super::*;

    #[test]
    fn serializes_level_then_message() {
        let payload = LogPayload::new(LogLevel::Info, "hello");

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"level":"info","message":"hello"}"#
        );
    }

    #[test]
    fn escapes_message_text() {
        let payload = LogPayload::new(LogLevel::Error, "line \"one\"\nline two");

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"level":"error","message":"line \"one\"\nline two"}"#
        );
    }
}
