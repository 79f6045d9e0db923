use std::sync::Arc;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use url::Url;

use crate::http_client::ReqwestTransport;

/// Creates a plain HTTP client without middleware for testing purposes.
pub fn create_test_http_client() -> Arc<ClientWithMiddleware> {
    Arc::new(ClientBuilder::new(Client::new()).build())
}

/// Creates a transport pointed at a test server, e.g. a `mockito` server URL.
pub fn create_test_transport(base_url: &str, api_key: Option<&str>) -> ReqwestTransport {
    let base_url = Url::parse(base_url).expect("test base URL should be valid");
    ReqwestTransport::new(create_test_http_client(), base_url, api_key.map(str::to_string))
}
