//! Configuration layer for confish.
//!
//! This module provides:
//! - Client connection settings ([`ClientConfig`])
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration for the binary ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Fixed header names and defaults ([`defaults`])
//!
//! # Priority
//!
//! The binary resolves each value with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** (the secret may also come from `CONFISH_APP_SECRET`)
//! 2. **TOML config file** - the `[service]` section
//!
//! `url`, `app_id` and `app_secret` have no defaults and must come from one
//! of the two. `timeout` is optional; without it the transport never times out
//! on its own.

mod cli;
pub mod defaults;
mod error;
mod service;
mod toml;
mod validated;


pub use cli::{Cli, Command, LogLevelArg};
pub use error::{ConfigError, field};
pub use service::ClientConfig;
pub use toml::{ServiceSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
