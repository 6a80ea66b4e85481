//! Per-request timing and size metrics.
//!
//! Each call fills one [`RequestMetrics`]; the client keeps only the most
//! recent records in a bounded [`MetricsWindow`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Timed phases of one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MetricField {
    /// Whole call, marshalling to result.
    ClientExecuteTime,
    RequestMarshallTime,
    CredentialsRequestTime,
    RequestSigningTime,
    /// Time spent inside the transport, retries included.
    HttpRequestTime,
    ResponseProcessingTime,
}

/// How a call ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Pending,
    Success,
    ServiceError { code: String },
    ClientError { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestMetrics {
    pub service: String,
    pub operation: String,
    pub started_at: DateTime<Utc>,
    pub timings: BTreeMap<MetricField, Duration>,
    pub request_bytes: usize,
    pub response_bytes: usize,
    pub status: Option<u16>,
    pub request_id: Option<String>,
    pub outcome: Outcome,
}

impl RequestMetrics {
    pub fn start(service: &str, operation: &str) -> Self {
        Self {
            service: service.to_string(),
            operation: operation.to_string(),
            started_at: Utc::now(),
            timings: BTreeMap::new(),
            request_bytes: 0,
            response_bytes: 0,
            status: None,
            request_id: None,
            outcome: Outcome::Pending,
        }
    }

    /// Run `f` and add its wall time to `field`.
    pub fn time<T>(&mut self, field: MetricField, f: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let out = f();
        self.record(field, started.elapsed());
        out
    }

    pub fn record(&mut self, field: MetricField, elapsed: Duration) {
        *self.timings.entry(field).or_default() += elapsed;
    }

    pub fn timing(&self, field: MetricField) -> Option<Duration> {
        self.timings.get(&field).copied()
    }
}

/// Bounded FIFO of recent [`RequestMetrics`].
#[derive(Debug)]
pub struct MetricsWindow {
    capacity: usize,
    entries: Mutex<VecDeque<RequestMetrics>>,
}

impl MetricsWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a record, evicting the oldest beyond capacity.
    pub fn record(&self, metrics: RequestMetrics) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(metrics);
    }

    /// Snapshot, oldest first.
    pub fn recent(&self) -> Vec<RequestMetrics> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<RequestMetrics> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.back().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_accumulates() {
        let mut m = RequestMetrics::start("ce", "GetTags");
        let v = m.time(MetricField::RequestMarshallTime, || 7);
        assert_eq!(v, 7);
        m.record(MetricField::HttpRequestTime, Duration::from_millis(5));
        m.record(MetricField::HttpRequestTime, Duration::from_millis(5));
        assert_eq!(m.timing(MetricField::HttpRequestTime), Some(Duration::from_millis(10)));
        assert!(m.timing(MetricField::RequestMarshallTime).is_some());
        assert!(m.timing(MetricField::RequestSigningTime).is_none());
        assert_eq!(m.outcome, Outcome::Pending);
    }

    #[test]
    fn window_is_bounded() {
        let window = MetricsWindow::new(3);
        for i in 0..5 {
            window.record(RequestMetrics::start("guardduty", &format!("Op{}", i)));
        }
        let ops: Vec<String> = window.recent().into_iter().map(|m| m.operation).collect();
        assert_eq!(ops, vec!["Op2", "Op3", "Op4"]);
        assert_eq!(window.latest().unwrap().operation, "Op4");
        window.clear();
        assert!(window.is_empty());
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let window = MetricsWindow::new(0);
        window.record(RequestMetrics::start("ce", "GetTags"));
        assert!(window.is_empty());
    }

    #[test]
    fn serializes_field_names() {
        let mut m = RequestMetrics::start("ce", "GetTags");
        m.record(MetricField::ClientExecuteTime, Duration::from_millis(1));
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("ClientExecuteTime"));
    }
}
