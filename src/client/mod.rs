//! Client operations for the confish service.
//!
//! This module provides:
//! - The service client ([`ConfishClient`])
//! - Log levels and the log body ([`LogLevel`], [`LogPayload`])
//! - Webhook decoding ([`WebhookPayload`], [`ConfigurationObject`], [`process_payload`])
//! - The error type shared by all operations ([`ClientError`])

mod api;
mod error;
mod log;
mod webhook;

#[cfg(test)]
mod log_tests;
#[cfg(test)]
mod webhook_tests;

pub use api::ConfishClient;
pub use error::ClientError;
pub use log::{LogLevel, LogPayload, UnknownLogLevel};
pub use webhook::{CONFIGURATION_UPDATED, ConfigurationObject, WebhookPayload, process_payload};
