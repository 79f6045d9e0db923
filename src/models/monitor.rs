//! This module defines the `Monitor` tagged union and the five monitor
//! records it can hold.
//!
//! Every record keeps optional wire fields as `Option<T>` so the in-memory
//! value remembers whether a field was present. The wire encoding is sparse:
//! `None`, zero numbers, empty strings, empty lists and `false` flags are all
//! omitted when a record is serialized. On decode, JSON `null` reads as unset
//! for every field.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::codec::{
    CodecError,
    sparse::{is_false, is_unset, null_as_default, serialize_finite},
};

/// The discriminator of a monitor, carried on the wire as the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonitorKind {
    /// Host connectivity monitor (`connectivity`).
    #[serde(rename = "connectivity")]
    Connectivity,
    /// Host metric monitor (`host`).
    #[serde(rename = "host")]
    HostMetric,
    /// Service metric monitor (`service`).
    #[serde(rename = "service")]
    ServiceMetric,
    /// External HTTP monitor (`external`).
    #[serde(rename = "external")]
    ExternalHttp,
    /// Expression monitor (`expression`).
    #[serde(rename = "expression")]
    Expression,
}

impl MonitorKind {
    /// All known monitor kinds, in wire documentation order.
    pub const ALL: [MonitorKind; 5] = [
        MonitorKind::Connectivity,
        MonitorKind::HostMetric,
        MonitorKind::ServiceMetric,
        MonitorKind::ExternalHttp,
        MonitorKind::Expression,
    ];

    /// Returns the wire value of the discriminator.
    pub fn as_str(&self) -> &'static str {
        match self {
            MonitorKind::Connectivity => "connectivity",
            MonitorKind::HostMetric => "host",
            MonitorKind::ServiceMetric => "service",
            MonitorKind::ExternalHttp => "external",
            MonitorKind::Expression => "expression",
        }
    }
}

impl fmt::Display for MonitorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MonitorKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MonitorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CodecError::UnknownType(s.to_string()))
    }
}

/// Connectivity monitor: alerts when a host stops reporting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityMonitor {
    /// Server-assigned identifier, empty until the monitor is created.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub name: Option<String>,
    /// Whether notifications are muted.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub is_mute: bool,
    /// Re-notification interval in minutes.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub notification_interval: Option<u64>,
    /// Services or roles the monitor applies to.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
    /// Services or roles excluded from the monitor.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub exclude_scopes: Vec<String>,
}

/// Host metric monitor: compares a host metric against thresholds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostMetricMonitor {
    /// Server-assigned identifier, empty until the monitor is created.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub name: Option<String>,
    /// Whether notifications are muted.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub is_mute: bool,
    /// Re-notification interval in minutes.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub notification_interval: Option<u64>,
    /// Name of the host metric.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub metric: Option<String>,
    /// Comparison operator, `>` or `<`.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub operator: Option<String>,
    /// Warning threshold.
    #[serde(default, skip_serializing_if = "is_unset", serialize_with = "serialize_finite")]
    pub warning: Option<f64>,
    /// Critical threshold.
    #[serde(default, skip_serializing_if = "is_unset", serialize_with = "serialize_finite")]
    pub critical: Option<f64>,
    /// Number of consecutive periods the threshold must be crossed.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub duration: Option<u64>,
    /// Services or roles the monitor applies to.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
    /// Services or roles excluded from the monitor.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub exclude_scopes: Vec<String>,
}

/// Service metric monitor: compares a service metric against thresholds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetricMonitor {
    /// Server-assigned identifier, empty until the monitor is created.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub name: Option<String>,
    /// Whether notifications are muted.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub is_mute: bool,
    /// Re-notification interval in minutes.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub notification_interval: Option<u64>,
    /// Service the metric belongs to.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub service: Option<String>,
    /// Name of the service metric.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub metric: Option<String>,
    /// Comparison operator, `>` or `<`.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub operator: Option<String>,
    /// Warning threshold.
    #[serde(default, skip_serializing_if = "is_unset", serialize_with = "serialize_finite")]
    pub warning: Option<f64>,
    /// Critical threshold.
    #[serde(default, skip_serializing_if = "is_unset", serialize_with = "serialize_finite")]
    pub critical: Option<f64>,
    /// Number of consecutive points the threshold must be crossed.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub duration: Option<u64>,
}

/// External HTTP monitor: probes a URL from outside.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalHttpMonitor {
    /// Server-assigned identifier, empty until the monitor is created.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub name: Option<String>,
    /// Whether notifications are muted.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub is_mute: bool,
    /// Re-notification interval in minutes.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub notification_interval: Option<u64>,
    /// URL to probe.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub url: Option<String>,
    /// Service the response-time metric is attached to.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub service: Option<String>,
    /// Failed checks tolerated before alerting.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub max_check_attempts: Option<u64>,
    /// Response time warning threshold, in milliseconds.
    #[serde(default, skip_serializing_if = "is_unset", serialize_with = "serialize_finite")]
    pub response_time_warning: Option<f64>,
    /// Response time critical threshold, in milliseconds.
    #[serde(default, skip_serializing_if = "is_unset", serialize_with = "serialize_finite")]
    pub response_time_critical: Option<f64>,
    /// Minutes the response time threshold must be crossed.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub response_time_duration: Option<u64>,
    /// Text the response body must contain.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub contains_string: Option<String>,
    /// Days before certificate expiration that raise a warning.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub certification_expiration_warning: Option<u64>,
    /// Days before certificate expiration that raise a critical alert.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub certification_expiration_critical: Option<u64>,
    /// Whether TLS certificate verification is skipped.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub skip_certificate_verification: bool,
}

/// Expression monitor: compares the result of a graph expression.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionMonitor {
    /// Server-assigned identifier, empty until the monitor is created.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub name: Option<String>,
    /// Whether notifications are muted.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub is_mute: bool,
    /// Re-notification interval in minutes.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub notification_interval: Option<u64>,
    /// Graph expression to evaluate.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub expression: Option<String>,
    /// Comparison operator, `>` or `<`.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub operator: Option<String>,
    /// Warning threshold.
    #[serde(default, skip_serializing_if = "is_unset", serialize_with = "serialize_finite")]
    pub warning: Option<f64>,
    /// Critical threshold.
    #[serde(default, skip_serializing_if = "is_unset", serialize_with = "serialize_finite")]
    pub critical: Option<f64>,
}

/// A monitor of one of the five known kinds.
///
/// Serialization writes the record's fields plus the `type` discriminator.
/// Decoding goes through [`crate::codec::decode_monitor`], which dispatches
/// on `type` before decoding the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Monitor {
    /// A connectivity monitor.
    #[serde(rename = "connectivity")]
    Connectivity(ConnectivityMonitor),
    /// A host metric monitor.
    #[serde(rename = "host")]
    HostMetric(HostMetricMonitor),
    /// A service metric monitor.
    #[serde(rename = "service")]
    ServiceMetric(ServiceMetricMonitor),
    /// An external HTTP monitor.
    #[serde(rename = "external")]
    ExternalHttp(ExternalHttpMonitor),
    /// An expression monitor.
    #[serde(rename = "expression")]
    Expression(ExpressionMonitor),
}

impl Monitor {
    /// Returns the discriminator of this monitor.
    pub fn kind(&self) -> MonitorKind {
        match self {
            Monitor::Connectivity(_) => MonitorKind::Connectivity,
            Monitor::HostMetric(_) => MonitorKind::HostMetric,
            Monitor::ServiceMetric(_) => MonitorKind::ServiceMetric,
            Monitor::ExternalHttp(_) => MonitorKind::ExternalHttp,
            Monitor::Expression(_) => MonitorKind::Expression,
        }
    }

    /// Returns the identifier, empty for monitors not yet created.
    pub fn id(&self) -> &str {
        match self {
            Monitor::Connectivity(m) => &m.id,
            Monitor::HostMetric(m) => &m.id,
            Monitor::ServiceMetric(m) => &m.id,
            Monitor::ExternalHttp(m) => &m.id,
            Monitor::Expression(m) => &m.id,
        }
    }

    /// Returns the display name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Monitor::Connectivity(m) => m.name.as_deref(),
            Monitor::HostMetric(m) => m.name.as_deref(),
            Monitor::ServiceMetric(m) => m.name.as_deref(),
            Monitor::ExternalHttp(m) => m.name.as_deref(),
            Monitor::Expression(m) => m.name.as_deref(),
        }
    }

    /// Returns whether notifications for this monitor are muted.
    pub fn is_mute(&self) -> bool {
        match self {
            Monitor::Connectivity(m) => m.is_mute,
            Monitor::HostMetric(m) => m.is_mute,
            Monitor::ServiceMetric(m) => m.is_mute,
            Monitor::ExternalHttp(m) => m.is_mute,
            Monitor::Expression(m) => m.is_mute,
        }
    }
}

macro_rules! impl_from_record {
    ($($record:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$record> for Monitor {
                fn from(record: $record) -> Self {
                    Monitor::$variant(record)
                }
            }
        )+
    };
}

impl_from_record! {
    ConnectivityMonitor => Connectivity,
    HostMetricMonitor => HostMetric,
    ServiceMetricMonitor => ServiceMetric,
    ExternalHttpMonitor => ExternalHttp,
    ExpressionMonitor => Expression,
}
