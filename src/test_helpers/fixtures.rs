//! Wire payloads and monitor values shared by unit and integration tests.

use crate::models::monitor::{
    ConnectivityMonitor, ExpressionMonitor, ExternalHttpMonitor, HostMetricMonitor, Monitor,
    ServiceMetricMonitor,
};

/// A host metric monitor as returned by the monitors endpoint.
pub const HOST_MONITOR_JSON: &str = r#"{
  "id": "2cSZzK3XfmG",
  "type": "host",
  "isMute": false,
  "name": "disk.aa-00.writes.delta",
  "duration": 3,
  "metric": "disk.aa-00.writes.delta",
  "operator": ">",
  "warning": 20000.0,
  "critical": 400000.0,
  "scopes": ["SomeService"],
  "excludeScopes": ["SomeService: db-slave-backup"],
  "notificationInterval": 60
}"#;

/// A monitor list holding one monitor of each kind, in `MonitorKind::ALL`
/// order.
pub const MONITOR_LIST_JSON: &str = r#"{
  "monitors": [
    {
      "id": "2cSZzK3XfmA",
      "type": "connectivity",
      "isMute": false,
      "scopes": [],
      "excludeScopes": []
    },
    {
      "id": "2cSZzK3XfmG",
      "type": "host",
      "isMute": false,
      "name": "disk.aa-00.writes.delta",
      "duration": 3,
      "metric": "disk.aa-00.writes.delta",
      "operator": ">",
      "warning": 20000.0,
      "critical": 400000.0,
      "scopes": ["SomeService"],
      "excludeScopes": ["SomeService: db-slave-backup"],
      "notificationInterval": 60
    },
    {
      "id": "2cSZzK3XfmB",
      "type": "service",
      "isMute": false,
      "name": "SomeService - custom.access_num.4xx_count",
      "service": "SomeService",
      "duration": 1,
      "metric": "custom.access_num.4xx_count",
      "operator": ">",
      "warning": 50.0,
      "critical": 100.0
    },
    {
      "id": "2cSZzK3XfmC",
      "type": "external",
      "isMute": false,
      "name": "example.com",
      "url": "http://www.example.com",
      "service": "SomeService",
      "maxCheckAttempts": 1,
      "responseTimeCritical": 10000,
      "responseTimeWarning": 5000,
      "responseTimeDuration": 5,
      "certificationExpirationCritical": 15,
      "certificationExpirationWarning": 30,
      "containsString": "Example",
      "skipCertificateVerification": true
    },
    {
      "id": "2cSZzK3XfmD",
      "type": "expression",
      "isMute": true,
      "name": "role average",
      "expression": "avg(roleSlots(\"server:role\",\"loadavg5\"))",
      "operator": ">",
      "warning": 5.0,
      "critical": 10.0,
      "notificationInterval": 30
    }
  ]
}"#;

/// One fully populated monitor of each kind, in `MonitorKind::ALL` order.
///
/// Every field holds a non-empty value, so these survive a sparse
/// encode/decode cycle unchanged.
pub fn sample_monitors() -> Vec<Monitor> {
    vec![
        Monitor::Connectivity(ConnectivityMonitor {
            id: "2cSZzK3XfmA".to_string(),
            name: Some("connectivity".to_string()),
            is_mute: true,
            notification_interval: Some(10),
            scopes: vec!["SomeService".to_string()],
            exclude_scopes: vec!["SomeService: staging".to_string()],
        }),
        Monitor::HostMetric(HostMetricMonitor {
            id: "2cSZzK3XfmG".to_string(),
            name: Some("disk.aa-00.writes.delta".to_string()),
            is_mute: true,
            notification_interval: Some(60),
            metric: Some("disk.aa-00.writes.delta".to_string()),
            operator: Some(">".to_string()),
            warning: Some(20000.0),
            critical: Some(400000.0),
            duration: Some(3),
            scopes: vec!["SomeService".to_string()],
            exclude_scopes: vec!["SomeService: db-slave-backup".to_string()],
        }),
        Monitor::ServiceMetric(ServiceMetricMonitor {
            id: "2cSZzK3XfmB".to_string(),
            name: Some("SomeService - custom.access_num.4xx_count".to_string()),
            is_mute: true,
            notification_interval: Some(15),
            service: Some("SomeService".to_string()),
            metric: Some("custom.access_num.4xx_count".to_string()),
            operator: Some(">".to_string()),
            warning: Some(50.0),
            critical: Some(100.0),
            duration: Some(1),
        }),
        Monitor::ExternalHttp(ExternalHttpMonitor {
            id: "2cSZzK3XfmC".to_string(),
            name: Some("example.com".to_string()),
            is_mute: true,
            notification_interval: Some(5),
            url: Some("http://www.example.com".to_string()),
            service: Some("SomeService".to_string()),
            max_check_attempts: Some(1),
            response_time_warning: Some(5000.0),
            response_time_critical: Some(10000.0),
            response_time_duration: Some(5),
            contains_string: Some("Example".to_string()),
            certification_expiration_warning: Some(30),
            certification_expiration_critical: Some(15),
            skip_certificate_verification: true,
        }),
        Monitor::Expression(ExpressionMonitor {
            id: "2cSZzK3XfmD".to_string(),
            name: Some("role average".to_string()),
            is_mute: true,
            notification_interval: Some(30),
            expression: Some("avg(roleSlots(\"server:role\",\"loadavg5\"))".to_string()),
            operator: Some("<".to_string()),
            warning: Some(0.5),
            critical: Some(0.25),
        }),
    ]
}
