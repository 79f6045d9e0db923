//! This module defines the interface between the monitors client and the
//! HTTP layer.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::{Method, StatusCode, header::InvalidHeaderValue};
use thiserror::Error;

/// Errors raised by an HTTP transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request URL could not be built from the base URL and path.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A header value (e.g. the API key) is not a valid HTTP header value.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    /// The underlying HTTP client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The request could not be sent or no response was received.
    #[error("Request error: {0}")]
    Request(#[from] reqwest_middleware::Error),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Request failed with status {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: StatusCode,
        /// The response body, lossily decoded as UTF-8.
        body: String,
    },
}

/// A transport that sends one JSON request and returns the response body.
///
/// Implementations own base URL resolution, authentication, connection
/// lifecycle and status translation: any non-2xx response is an error, and
/// the returned body has been read to the end.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a request to `path`, relative to the service base URL, with an
    /// optional JSON body.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError>;
}
