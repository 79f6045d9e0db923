//! `HttpTransport` implementation backed by `reqwest`.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use reqwest::{
    Method,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use reqwest_middleware::ClientWithMiddleware;
use url::Url;

use super::{HttpTransport, TransportError, create_http_client};
use crate::config::ClientConfig;

const API_KEY_HEADER: &str = "x-api-key";

/// Sends monitor requests to the service over HTTP.
#[derive(Clone)]
pub struct ReqwestTransport {
    /// HTTP client, possibly wrapped with caller-supplied middleware
    client: Arc<ClientWithMiddleware>,
    /// Base URL every request path is appended to
    base_url: Url,
    /// API key sent in the `X-Api-Key` header
    api_key: Option<String>,
}

impl ReqwestTransport {
    /// Creates a transport from an existing client.
    pub fn new(client: Arc<ClientWithMiddleware>, base_url: Url, api_key: Option<String>) -> Self {
        Self { client, base_url, api_key }
    }

    /// Creates a transport and its HTTP client from the client configuration.
    #[tracing::instrument(skip(config), level = "debug")]
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = create_http_client(&config.http)?;
        tracing::debug!(
            base_url = %config.base_url,
            authenticated = config.api_key.is_some(),
            "HTTP transport created."
        );
        Ok(Self::new(Arc::new(client), config.base_url.clone(), config.api_key.clone()))
    }

    /// Returns the base URL of the service.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins the base URL and a resource path.
    fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    fn headers(&self) -> Result<HeaderMap, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(api_key) = &self.api_key {
            let mut value = HeaderValue::from_str(api_key)?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        Ok(headers)
    }
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[tracing::instrument(skip(self, body), level = "debug")]
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError> {
        let url = self.url_for(path)?;
        let mut request = self.client.request(method, url).headers(self.headers()?);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.inspect_err(|e| {
            tracing::error!(error = %e, "Request to monitoring service failed.");
        })?;

        let status = response.status();
        // Error bodies are read too, they carry the service's message.
        let body = response.bytes().await.map_err(TransportError::Body)?;

        if !status.is_success() {
            tracing::warn!(%status, "Monitoring service returned an error status.");
            return Err(TransportError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        tracing::debug!(%status, bytes = body.len(), "Response received.");
        Ok(body.to_vec())
    }
}
