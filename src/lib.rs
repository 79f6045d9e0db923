#![warn(missing_docs)]
//! Typed client for a monitoring service's `monitors` resource.
//!
//! Monitors come in five kinds, told apart by the `type` field of their JSON
//! form. [`codec`] turns that JSON into the closed [`models::Monitor`] enum
//! and back, and [`client::MonitorClient`] wraps the four REST operations of
//! the resource around an injected [`http_client::HttpTransport`].

pub mod client;
pub mod codec;
pub mod config;
pub mod http_client;
pub mod models;
pub mod test_helpers;
