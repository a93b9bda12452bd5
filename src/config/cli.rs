//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::client::LogLevel;

use super::defaults;

/// confish: configuration and logging service client
///
/// Fetches configuration, forwards log messages and decodes
/// configuration webhooks.
#[derive(Debug, Parser)]
#[command(name = "confish")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Service base URL
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Application identifier
    #[arg(long = "app-id", global = true)]
    pub app_id: Option<String>,

    /// Application secret
    #[arg(
        long = "app-secret",
        env = defaults::APP_SECRET_ENV,
        hide_env_values = true,
        global = true
    )]
    pub app_secret: Option<String>,

    /// Webhook route served by the application
    #[arg(long = "webhook-path", global = true)]
    pub webhook_path: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for confish
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },

    /// Fetch a configuration and print it as JSON
    Get {
        /// Configuration identifier
        config_id: String,
    },

    /// Send a log message
    Log {
        /// Log level
        #[arg(long, short, value_enum, default_value_t = LogLevelArg::Info)]
        level: LogLevelArg,

        /// Message text
        message: String,
    },

    /// Decode a webhook body and print its configuration values
    Webhook {
        /// File containing the webhook body (stdin when omitted)
        file: Option<PathBuf>,
    },
}

/// Log level argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    /// Detailed debugging information
    Debug,
    /// General information
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
    /// Critical failures
    Critical,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Debug => Self::Debug,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Critical => Self::Critical,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
