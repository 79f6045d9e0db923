//! This module contains the data models of the monitors resource.

pub mod monitor;

pub use monitor::{
    ConnectivityMonitor, ExpressionMonitor, ExternalHttpMonitor, HostMetricMonitor, Monitor,
    MonitorKind, ServiceMetricMonitor,
};
