//! Client for the monitors resource.
//!
//! Each operation is one request through the injected [`HttpTransport`]
//! whose response body is piped through the codec. Transport and codec
//! errors are returned as they are; nothing is retried.

mod error;

pub use error::ClientError;
use reqwest::Method;

use crate::{
    codec::{decode_monitor, decode_monitor_list, encode_monitor},
    config::ClientConfig,
    http_client::{HttpTransport, ReqwestTransport, TransportError},
    models::monitor::Monitor,
};

const MONITORS_PATH: &str = "monitors";

/// Path of a single monitor, with the id percent-encoded.
fn monitor_path(monitor_id: &str) -> String {
    format!("{MONITORS_PATH}/{}", urlencoding::encode(monitor_id))
}

/// Lists, creates, updates and deletes monitors.
///
/// The client holds no state besides its transport and can be shared across
/// tasks.
#[derive(Debug, Clone)]
pub struct MonitorClient<T> {
    transport: T,
}

impl MonitorClient<ReqwestTransport> {
    /// Creates a client talking HTTP to the service described by `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self::new(ReqwestTransport::from_config(config)?))
    }
}

impl<T: HttpTransport> MonitorClient<T> {
    /// Creates a client over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches all monitors, in the order the service returns them.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn list_monitors(&self) -> Result<Vec<Monitor>, ClientError> {
        let body = self.transport.send(Method::GET, MONITORS_PATH, None).await?;
        let monitors = decode_monitor_list(&body)?;
        tracing::debug!(count = monitors.len(), "Fetched monitors.");
        Ok(monitors)
    }

    /// Creates a monitor and returns it as stored by the service, with its
    /// assigned id.
    #[tracing::instrument(skip(self, monitor), fields(kind = %monitor.kind()), level = "debug")]
    pub async fn create_monitor(&self, monitor: &Monitor) -> Result<Monitor, ClientError> {
        let body = encode_monitor(monitor)?;
        let response = self.transport.send(Method::POST, MONITORS_PATH, Some(body)).await?;
        let created = decode_monitor(&response)?;
        tracing::info!(monitor_id = %created.id(), kind = %created.kind(), "Monitor created.");
        Ok(created)
    }

    /// Replaces the monitor `monitor_id` and returns the updated monitor.
    #[tracing::instrument(skip(self, monitor), fields(kind = %monitor.kind()), level = "debug")]
    pub async fn update_monitor(
        &self,
        monitor_id: &str,
        monitor: &Monitor,
    ) -> Result<Monitor, ClientError> {
        let body = encode_monitor(monitor)?;
        let response =
            self.transport.send(Method::PUT, &monitor_path(monitor_id), Some(body)).await?;
        let updated = decode_monitor(&response)?;
        tracing::info!(monitor_id = %updated.id(), kind = %updated.kind(), "Monitor updated.");
        Ok(updated)
    }

    /// Deletes the monitor `monitor_id` and returns the record echoed back
    /// by the service.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn delete_monitor(&self, monitor_id: &str) -> Result<Monitor, ClientError> {
        let response = self.transport.send(Method::DELETE, &monitor_path(monitor_id), None).await?;
        let deleted = decode_monitor(&response)?;
        tracing::info!(monitor_id = %deleted.id(), kind = %deleted.kind(), "Monitor deleted.");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::{Value, json};

    use super::*;
    use crate::{
        codec::CodecError,
        http_client::MockHttpTransport,
        models::monitor::{ExpressionMonitor, HostMetricMonitor, MonitorKind},
        test_helpers::{HOST_MONITOR_JSON, HostMetricMonitorBuilder, MONITOR_LIST_JSON},
    };

    fn body_json(body: &Option<Vec<u8>>) -> Option<Value> {
        body.as_deref().map(|b| serde_json::from_slice(b).unwrap())
    }

    #[test]
    fn test_monitor_path_encodes_id() {
        assert_eq!(monitor_path("2cSZzK3XfmG"), "monitors/2cSZzK3XfmG");
        assert_eq!(monitor_path("a/b c"), "monitors/a%2Fb%20c");
    }

    ////////////////////////////////////////////////////////////
    // list_monitors tests
    ////////////////////////////////////////////////////////////

    #[tokio::test]
    async fn test_list_monitors() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|method, path, body| {
                *method == Method::GET && path == "monitors" && body.is_none()
            })
            .times(1)
            .returning(|_, _, _| Ok(MONITOR_LIST_JSON.as_bytes().to_vec()));

        let client = MonitorClient::new(transport);
        let monitors = client.list_monitors().await.unwrap();

        assert_eq!(monitors.len(), 5);
        assert_eq!(monitors[1].kind(), MonitorKind::HostMetric);
        assert_eq!(monitors[1].id(), "2cSZzK3XfmG");
    }

    #[tokio::test]
    async fn test_list_monitors_returns_no_partial_list() {
        let mut transport = MockHttpTransport::new();
        transport.expect_send().times(1).returning(|_, _, _| {
            Ok(br#"{"monitors":[{"type":"host"},{"type":"bogus"},{"type":"service"}]}"#.to_vec())
        });

        let client = MonitorClient::new(transport);
        let err = client.list_monitors().await.unwrap_err();

        assert!(matches!(err, ClientError::Codec(CodecError::UnknownType(ref t)) if t == "bogus"));
    }

    #[tokio::test]
    async fn test_list_monitors_propagates_transport_error() {
        let mut transport = MockHttpTransport::new();
        transport.expect_send().times(1).returning(|_, _, _| {
            Err(TransportError::Status {
                status: StatusCode::UNAUTHORIZED,
                body: "Authentication failed".to_string(),
            })
        });

        let client = MonitorClient::new(transport);
        let err = client.list_monitors().await.unwrap_err();

        assert!(matches!(
            err,
            ClientError::Transport(TransportError::Status { status, .. })
                if status == StatusCode::UNAUTHORIZED
        ));
    }

    ////////////////////////////////////////////////////////////
    // create_monitor tests
    ////////////////////////////////////////////////////////////

    #[tokio::test]
    async fn test_create_monitor_sends_sparse_body_without_id() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|method, path, body| {
                *method == Method::POST
                    && path == "monitors"
                    && body_json(body)
                        == Some(json!({
                            "type": "expression",
                            "name": "role average",
                            "expression": "avg(roleSlots(\"server:role\",\"loadavg5\"))",
                            "operator": ">",
                            "warning": 5.0
                        }))
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(br#"{"id":"3JRg5Sz5Tx7","type":"expression","name":"role average"}"#.to_vec())
            });

        let monitor = Monitor::Expression(ExpressionMonitor {
            name: Some("role average".to_string()),
            expression: Some("avg(roleSlots(\"server:role\",\"loadavg5\"))".to_string()),
            operator: Some(">".to_string()),
            warning: Some(5.0),
            critical: Some(0.0),
            ..Default::default()
        });

        let client = MonitorClient::new(transport);
        let created = client.create_monitor(&monitor).await.unwrap();

        assert_eq!(created.id(), "3JRg5Sz5Tx7");
        assert_eq!(created.kind(), MonitorKind::Expression);
    }

    #[tokio::test]
    async fn test_create_monitor_rejects_unknown_type_in_response() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_, _, _| Ok(br#"{"id":"x","type":"anomalyDetection"}"#.to_vec()));

        let client = MonitorClient::new(transport);
        let err = client
            .create_monitor(&Monitor::HostMetric(HostMetricMonitor::default()))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Codec(CodecError::UnknownType(_))));
    }

    #[tokio::test]
    async fn test_create_monitor_with_nan_threshold_sends_nothing() {
        let mut transport = MockHttpTransport::new();
        transport.expect_send().times(0);

        let monitor =
            HostMetricMonitorBuilder::new().metric("loadavg5", ">").warning(f64::NAN).build();

        let client = MonitorClient::new(transport);
        let err = client.create_monitor(&monitor).await.unwrap_err();

        assert!(matches!(err, ClientError::Codec(CodecError::Encode(_))));
    }

    ////////////////////////////////////////////////////////////
    // update_monitor tests
    ////////////////////////////////////////////////////////////

    #[tokio::test]
    async fn test_update_monitor_targets_id() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|method, path, body| {
                *method == Method::PUT
                    && path == "monitors/2cSZzK3XfmG"
                    && body_json(body).is_some_and(|b| b["type"] == "host")
            })
            .times(1)
            .returning(|_, _, _| Ok(HOST_MONITOR_JSON.as_bytes().to_vec()));

        let monitor = HostMetricMonitorBuilder::new()
            .id("2cSZzK3XfmG")
            .metric("disk.aa-00.writes.delta", ">")
            .build();

        let client = MonitorClient::new(transport);
        let updated = client.update_monitor("2cSZzK3XfmG", &monitor).await.unwrap();

        let Monitor::HostMetric(host) = updated else {
            panic!("expected a host metric monitor");
        };
        assert_eq!(host.critical, Some(400000.0));
    }

    ////////////////////////////////////////////////////////////
    // delete_monitor tests
    ////////////////////////////////////////////////////////////

    #[tokio::test]
    async fn test_delete_monitor_returns_echoed_monitor() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|method, path, body| {
                *method == Method::DELETE && path == "monitors/2cSZzK3XfmG" && body.is_none()
            })
            .times(1)
            .returning(|_, _, _| Ok(HOST_MONITOR_JSON.as_bytes().to_vec()));

        let client = MonitorClient::new(transport);
        let deleted = client.delete_monitor("2cSZzK3XfmG").await.unwrap();

        assert_eq!(deleted.id(), "2cSZzK3XfmG");
    }

    #[tokio::test]
    async fn test_delete_monitor_with_malformed_response() {
        let mut transport = MockHttpTransport::new();
        transport.expect_send().times(1).returning(|_, _, _| Ok(b"<html>".to_vec()));

        let client = MonitorClient::new(transport);
        let err = client.delete_monitor("2cSZzK3XfmG").await.unwrap_err();

        assert!(matches!(err, ClientError::Codec(CodecError::Malformed(_))));
    }
}
