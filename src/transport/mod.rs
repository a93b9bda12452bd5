//! Transport layer for talking to the confish service.
//!
//! This module provides:
//! - Request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - The transport abstraction ([`HttpClient`])
//! - The production transport backed by reqwest ([`ReqwestClient`])
//! - Transport failure classification ([`HttpError`])
//!
//! A transport sends exactly one request per call and never retries.

mod error;
mod message;
mod reqwest_client;


pub use error::HttpError;
pub use message::{HttpClient, HttpRequest, HttpResponse};
pub use reqwest_client::ReqwestClient;
