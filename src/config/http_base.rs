use std::time::Duration;

use serde::Deserialize;

use super::{deserialize_duration_from_seconds, deserialize_optional_duration_from_seconds};

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Configuration for the base HTTP client.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BaseHttpClientConfig {
    /// Timeout for establishing connections
    #[serde(
        default = "default_connect_timeout",
        deserialize_with = "deserialize_duration_from_seconds"
    )]
    pub connect_timeout: Duration,

    /// Timeout for a whole request, unlimited when unset
    #[serde(default, deserialize_with = "deserialize_optional_duration_from_seconds")]
    pub request_timeout: Option<Duration>,

    /// Value of the `User-Agent` header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for BaseHttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: default_connect_timeout(),
            request_timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_http_client_config_default() {
        let config = BaseHttpClientConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, None);
        assert!(config.user_agent.starts_with("monitor-api/"));
    }

    #[test]
    fn test_base_http_client_config_custom_values_json() {
        let json = r#"{
            "connect_timeout": 5,
            "request_timeout": 30,
            "user_agent": "ops-bot/1.0"
        }"#;
        let config: BaseHttpClientConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.user_agent, "ops-bot/1.0");
    }

    #[test]
    fn test_base_http_client_config_partial_json_uses_defaults() {
        let json = r#"{
            "request_timeout": 15
        }"#;
        let config: BaseHttpClientConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.connect_timeout, Duration::from_secs(10)); // default
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.user_agent, default_user_agent()); // default
    }

    #[test]
    fn test_base_http_client_config_rejects_non_numeric_timeout() {
        let json = r#"{ "connect_timeout": "ten" }"#;
        let result: Result<BaseHttpClientConfig, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
