use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

use super::{BaseHttpClientConfig, deserialize_url};

/// Loads the API key from the `MONITOR_API_KEY` environment variable.
fn default_api_key_from_env() -> Option<String> {
    std::env::var("MONITOR_API_KEY").ok()
}

/// Configuration for talking to the monitoring service.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Base URL of the service API, e.g. `https://api.example.com/api/v0`.
    /// Resource paths are appended to it.
    #[serde(deserialize_with = "deserialize_url")]
    pub base_url: Url,

    /// API key sent with every request.
    /// If not set in config, falls back to `MONITOR_API_KEY` env var.
    #[serde(default = "default_api_key_from_env")]
    pub api_key: Option<String>,

    /// Configuration for the base HTTP client.
    #[serde(default)]
    pub http: BaseHttpClientConfig,
}

impl ClientConfig {
    /// Creates a new `ClientConfig` from `client.yaml` in the configuration
    /// directory, overridden by `MONITOR_API__*` environment variables.
    ///
    /// The file is optional, so the whole configuration can come from the
    /// environment.
    pub fn new(config_dir: Option<&str>) -> Result<Self, ConfigError> {
        let config_dir_str = config_dir.unwrap_or("configs");
        let s = Config::builder()
            .add_source(File::with_name(&format!("{config_dir_str}/client.yaml")).required(false))
            .add_source(Environment::with_prefix("MONITOR_API").separator("__"))
            .build()?;
        s.try_deserialize()
    }
}
