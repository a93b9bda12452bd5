//! confish: configuration and logging service client
//!
//! A library for fetching named configurations, forwarding log messages
//! and decoding configuration-change webhooks from the confish service.

pub mod client;
pub mod codec;
pub mod config;
pub mod transport;
