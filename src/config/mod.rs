//! Configuration module for the monitors client.

mod client_config;
mod helpers;
mod http_base;

pub use client_config::ClientConfig;
pub use helpers::{
    deserialize_duration_from_seconds, deserialize_optional_duration_from_seconds, deserialize_url,
};
pub use http_base::BaseHttpClientConfig;
