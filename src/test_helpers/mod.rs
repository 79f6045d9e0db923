//! A set of helpers for testing

mod fixtures;
mod http_client;
mod monitor;

pub use fixtures::{HOST_MONITOR_JSON, MONITOR_LIST_JSON, sample_monitors};
pub use http_client::{create_test_http_client, create_test_transport};
pub use monitor::HostMetricMonitorBuilder;
