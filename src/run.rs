//! Task execution for the command-line tool.
//!
//! Each invocation runs exactly one [`Task`] against the service.

use std::io::{Read, Write};
use std::path::PathBuf;

use thiserror::Error;

use confish::client::{ClientError, ConfishClient, LogLevel, WebhookPayload};
use confish::config::{Command, ValidatedConfig};
use confish::transport::{HttpClient, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for task execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The client rejected its configuration or an operation failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Failed to read the webhook body.
    #[error("Failed to read webhook body from {source_name}: {source}")]
    Input {
        /// File path, or `stdin`
        source_name: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl RunError {
    /// Returns true if the failure stems from client configuration.
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Client(e) if e.is_config())
    }
}

/// A single client operation requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Fetch a configuration and print it.
    Get {
        /// Configuration identifier
        config_id: String,
    },
    /// Send a log message.
    Log {
        /// Severity
        level: LogLevel,
        /// Message text
        message: String,
    },
    /// Decode a webhook body and print its values.
    Webhook {
        /// Body file; stdin when `None`
        file: Option<PathBuf>,
    },
}

impl Task {
    /// Maps a subcommand to a task; `init` has no task.
    pub fn from_command(command: Command) -> Option<Self> {
        match command {
            Command::Init { .. } => None,
            Command::Get { config_id } => Some(Self::Get { config_id }),
            Command::Log { level, message } => Some(Self::Log {
                level: level.into(),
                message,
            }),
            Command::Webhook { file } => Some(Self::Webhook { file }),
        }
    }
}

/// Builds the production client, applying the configured timeout.
///
/// # Errors
///
/// Returns an error if the transport cannot be created or the client
/// configuration is invalid.
pub fn build_client(config: &ValidatedConfig) -> Result<ConfishClient, RunError> {
    let http = match config.timeout {
        Some(timeout) => ReqwestClient::with_timeout(timeout).map_err(ClientError::from)?,
        None => ReqwestClient::new(),
    };

    Ok(ConfishClient::with_http_client(config.client.clone(), http)?)
}

/// Executes `task`, reading webhook bodies from `stdin` when no file is
/// given and writing results to `out`.
///
/// # Errors
///
/// Returns an error if the operation fails or output cannot be written.
pub async fn execute<H, R, W>(
    client: &ConfishClient<H>,
    task: Task,
    stdin: R,
    out: &mut W,
) -> Result<(), RunError>
where
    H: HttpClient,
    R: Read,
    W: Write,
{
    match task {
        Task::Get { config_id } => {
            let value = client.get_config_value(&config_id).await?;
            tracing::info!(config_id = %config_id, "Fetched configuration");
            print_json(out, &value)
        }
        Task::Log { level, message } => {
            client.log(level, message).await?;
            tracing::info!(level = %level, "Log message sent");
            Ok(())
        }
        Task::Webhook { file } => {
            let body = read_body(file, stdin)?;
            let payload = WebhookPayload::from_slice(&body)?;
            let values: serde_json::Value = client.process_webhook_payload(&payload)?;
            tracing::info!(
                configuration = %payload.configuration.name,
                "Processed configuration update"
            );
            print_json(out, &values)
        }
    }
}

fn read_body(file: Option<PathBuf>, mut stdin: impl Read) -> Result<Vec<u8>, RunError> {
    match file {
        Some(path) => std::fs::read(&path).map_err(|source| RunError::Input {
            source_name: path.display().to_string(),
            source,
        }),
        None => {
            let mut body = Vec::new();
            stdin
                .read_to_end(&mut body)
                .map_err(|source| RunError::Input {
                    source_name: "stdin".to_string(),
                    source,
                })?;
            Ok(body)
        }
    }
}

fn print_json(out: &mut impl Write, value: &serde_json::Value) -> Result<(), RunError> {
    serde_json::to_writer_pretty(&mut *out, value)
        .map_err(|e| RunError::Output(e.into()))?;
    writeln!(out).map_err(RunError::Output)
}
