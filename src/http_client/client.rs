//! This module provides functionality to create the HTTP client used by the
//! monitors transport.

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

use super::TransportError;
use crate::config::BaseHttpClientConfig;

/// Creates an HTTP client from the base client configuration.
///
/// No middleware is installed: every call is a single request. Callers that
/// need extra behavior can wrap their own `reqwest::Client` with
/// `reqwest_middleware::ClientBuilder` and hand it to
/// [`super::ReqwestTransport::new`] instead.
///
/// # Parameters:
/// - `config`: Timeouts and user agent of the underlying `reqwest::Client`
///
/// # Returns
/// A `ClientWithMiddleware`, or an error if the TLS backend cannot be
/// initialized
pub fn create_http_client(
    config: &BaseHttpClientConfig,
) -> Result<ClientWithMiddleware, TransportError> {
    let mut builder = reqwest::Client::builder()
        .connect_timeout(config.connect_timeout)
        .user_agent(config.user_agent.as_str());

    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }

    let base_client = builder.build().map_err(TransportError::ClientBuild)?;

    Ok(ClientBuilder::new(base_client).build())
}
