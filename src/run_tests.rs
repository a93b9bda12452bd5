//! Tests for task execution.

use std::sync::Mutex;
use std::time::Duration;

use confish::client::{ClientError, ConfishClient, LogLevel};
use confish::config::{ClientConfig, Cli, ValidatedConfig};
use confish::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

use super::{RunError, Task, build_client, execute};

/// Mock transport returning one fixed response and capturing requests.
struct MockClient {
    status: http::StatusCode,
    body: &'static str,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    fn new(status: u16, body: &'static str) -> Self {
        Self {
            status: http::StatusCode::from_u16(status).unwrap(),
            body,
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        Ok(HttpResponse::new(
            self.status,
            http::HeaderMap::new(),
            self.body.as_bytes().to_vec(),
        ))
    }
}

fn client(status: u16, body: &'static str) -> ConfishClient<MockClient> {
    ConfishClient::with_http_client(
        ClientConfig::new("https://confish.example.com", "app-123", "s3cret"),
        MockClient::new(status, body),
    )
    .unwrap()
}

async fn run(
    client: &ConfishClient<MockClient>,
    task: Task,
    stdin: &str,
) -> (Result<(), RunError>, String) {
    let mut out = Vec::new();
    let result = execute(client, task, stdin.as_bytes(), &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

const WEBHOOK_BODY: &str =
    r#"{"event":"configuration.updated","configuration":{"name":"flags","values":{"beta":true}}}"#;

mod task_mapping {
    use super::*;

    #[test]
    fn init_has_no_task() {
        let cli = Cli::parse_from_iter(["confish", "init"]);
        assert_eq!(Task::from_command(cli.command), None);
    }

    #[test]
    fn log_command_maps_level() {
        let cli = Cli::parse_from_iter(["confish", "log", "-l", "warn", "slow disk"]);

        assert_eq!(
            Task::from_command(cli.command),
            Some(Task::Log {
                level: LogLevel::Warn,
                message: "slow disk".to_string(),
            })
        );
    }

    #[test]
    fn get_command_maps_id() {
        let cli = Cli::parse_from_iter(["confish", "get", "flags"]);

        assert_eq!(
            Task::from_command(cli.command),
            Some(Task::Get {
                config_id: "flags".to_string()
            })
        );
    }
}

mod get {
    use super::*;

    #[tokio::test]
    async fn prints_fetched_configuration() {
        let client = client(200, r#"{"feature_enabled":true}"#);

        let (result, out) = run(
            &client,
            Task::Get {
                config_id: "flags".to_string(),
            },
            "",
        )
        .await;

        result.unwrap();
        let printed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(printed["feature_enabled"], true);
        assert!(out.ends_with('\n'));
    }

    #[tokio::test]
    async fn http_error_is_runtime_error() {
        let client = client(404, "missing");

        let (result, out) = run(
            &client,
            Task::Get {
                config_id: "nope".to_string(),
            },
            "",
        )
        .await;

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            RunError::Client(ClientError::Http { .. })
        ));
        assert!(!err.is_config());
        assert!(out.is_empty());
    }
}

mod log {
    use super::*;

    #[tokio::test]
    async fn sends_message_and_prints_nothing() {
        let client = client(201, "");

        let (result, out) = run(
            &client,
            Task::Log {
                level: LogLevel::Error,
                message: "payment failed".to_string(),
            },
            "",
        )
        .await;

        result.unwrap();
        assert!(out.is_empty());

        let requests = client.http_client().requests.lock().unwrap();
        assert_eq!(
            requests[0].body.as_deref(),
            Some(br#"{"level":"error","message":"payment failed"}"#.as_slice())
        );
    }
}

mod webhook {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_body_from_stdin() {
        let client = client(200, "");

        let (result, out) = run(&client, Task::Webhook { file: None }, WEBHOOK_BODY).await;

        result.unwrap();
        let printed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(printed, serde_json::json!({"beta": true}));
        assert!(client.http_client().requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn reads_body_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WEBHOOK_BODY.as_bytes()).unwrap();
        let client = client(200, "");

        let (result, out) = run(
            &client,
            Task::Webhook {
                file: Some(file.path().to_path_buf()),
            },
            "",
        )
        .await;

        result.unwrap();
        assert!(out.contains("\"beta\": true"));
    }

    #[tokio::test]
    async fn missing_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let client = client(200, "");

        let (result, _) = run(
            &client,
            Task::Webhook {
                file: Some(dir.path().join("absent.json")),
            },
            "",
        )
        .await;

        assert!(matches!(result, Err(RunError::Input { .. })));
    }

    #[tokio::test]
    async fn unsupported_event_is_reported() {
        let client = client(200, "");
        let body = r#"{"event":"configuration.deleted",
            "configuration":{"name":"flags","values":{}}}"#;

        let (result, out) = run(&client, Task::Webhook { file: None }, body).await;

        assert!(matches!(
            result,
            Err(RunError::Client(ClientError::UnsupportedEvent { .. }))
        ));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let client = client(200, "");

        let (result, _) = run(&client, Task::Webhook { file: None }, "not json").await;

        assert!(matches!(
            result,
            Err(RunError::Client(ClientError::Decode(_)))
        ));
    }
}

mod client_building {
    use super::*;

    fn config(timeout: Option<Duration>, app_secret: &str) -> ValidatedConfig {
        ValidatedConfig {
            client: ClientConfig::new("https://confish.example.com", "app-123", app_secret),
            timeout,
            verbose: false,
        }
    }

    #[test]
    fn builds_client_with_timeout() {
        let client = build_client(&config(Some(Duration::from_secs(3)), "s3cret")).unwrap();
        assert_eq!(client.config().app_id, "app-123");
    }

    #[test]
    fn builds_client_without_timeout() {
        assert!(build_client(&config(None, "s3cret")).is_ok());
    }

    #[test]
    fn invalid_credentials_are_config_errors() {
        let err = build_client(&config(None, "bad\nsecret")).unwrap_err();
        assert!(err.is_config());
    }
}
