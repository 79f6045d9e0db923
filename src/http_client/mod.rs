//! This module provides the HTTP transport used by the monitors client.

mod client;
mod reqwest_transport;
mod transport;

pub use client::create_http_client;
#[cfg(test)]
pub use transport::MockHttpTransport;
pub use reqwest_transport::ReqwestTransport;
pub use transport::{HttpTransport, TransportError};
