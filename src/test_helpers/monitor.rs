//! A builder for creating host metric monitors in tests.

use crate::models::monitor::{HostMetricMonitor, Monitor};

/// A builder for creating host metric `Monitor` instances in tests.
///
/// Unset fields stay unset, so a built monitor encodes to only the fields
/// the test touched.
#[derive(Debug, Default)]
pub struct HostMetricMonitorBuilder {
    record: HostMetricMonitor,
}

impl HostMetricMonitorBuilder {
    /// Creates a new `HostMetricMonitorBuilder` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ID for the monitor.
    pub fn id(mut self, id: &str) -> Self {
        self.record.id = id.to_string();
        self
    }

    /// Sets the name for the monitor.
    pub fn name(mut self, name: &str) -> Self {
        self.record.name = Some(name.to_string());
        self
    }

    /// Mutes the monitor.
    pub fn muted(mut self) -> Self {
        self.record.is_mute = true;
        self
    }

    /// Sets the metric and comparison operator.
    pub fn metric(mut self, metric: &str, operator: &str) -> Self {
        self.record.metric = Some(metric.to_string());
        self.record.operator = Some(operator.to_string());
        self
    }

    /// Sets the warning threshold.
    pub fn warning(mut self, warning: f64) -> Self {
        self.record.warning = Some(warning);
        self
    }

    /// Sets the critical threshold.
    pub fn critical(mut self, critical: f64) -> Self {
        self.record.critical = Some(critical);
        self
    }

    /// Sets the duration, in periods.
    pub fn duration(mut self, duration: u64) -> Self {
        self.record.duration = Some(duration);
        self
    }

    /// Sets the scopes the monitor applies to.
    pub fn scopes(mut self, scopes: &[&str]) -> Self {
        self.record.scopes = scopes.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Builds the `Monitor` instance.
    pub fn build(self) -> Monitor {
        Monitor::HostMetric(self.record)
    }
}
