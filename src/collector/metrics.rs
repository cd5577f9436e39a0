//! In-process counters for request outcomes

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Request;

use super::RequestCollector;
use crate::error::{codes, ArmError};
use crate::pipeline::Response;

/// Lock-free lifecycle counters.
///
/// Counts are monotonic. `snapshot` renders them as a string map, the form
/// the surrounding platform scrapes for client metrics.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    /// Requests that have started
    started: AtomicU64,

    /// Requests that finished below 400
    completed: AtomicU64,

    /// Requests that failed, in transit or with a 4xx/5xx status
    failed: AtomicU64,

    /// Failures where delegation itself broke down
    transport_failures: AtomicU64,

    /// 4xx/5xx responses whose body was not a conformant ARM envelope
    non_arm_failures: AtomicU64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests that have started.
    pub fn started(&self) -> u64 {
        self.started.load(Ordering::Relaxed)
    }

    /// Number of requests that completed below 400.
    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    /// Number of failed requests.
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Number of failures where delegation itself broke down.
    pub fn transport_failures(&self) -> u64 {
        self.transport_failures.load(Ordering::Relaxed)
    }

    /// Number of 4xx/5xx responses without a conformant ARM envelope.
    pub fn non_arm_failures(&self) -> u64 {
        self.non_arm_failures.load(Ordering::Relaxed)
    }

    /// Render all counters as a string map.
    pub fn snapshot(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        map.insert("request_started_count".to_string(), self.started().to_string());
        map.insert(
            "request_completed_count".to_string(),
            self.completed().to_string(),
        );
        map.insert("request_failed_count".to_string(), self.failed().to_string());
        map.insert(
            "transport_failure_count".to_string(),
            self.transport_failures().to_string(),
        );
        map.insert(
            "non_arm_failure_count".to_string(),
            self.non_arm_failures().to_string(),
        );

        map
    }
}

impl RequestCollector for MetricsCollector {
    fn request_started(&self, _request: &Request) {
        self.started.fetch_add(1, Ordering::Relaxed);
    }

    fn request_completed(&self, _request: &Request, _response: &Response) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    fn request_failed(&self, _request: &Request, _response: Option<&Response>, error: &ArmError) {
        self.failed.fetch_add(1, Ordering::Relaxed);

        match error.code.as_str() {
            codes::TRANSPORT_ERROR | codes::UNEXPECTED_TRANSPORT_BEHAVIOR => {
                self.transport_failures.fetch_add(1, Ordering::Relaxed);
            }
            codes::NOT_AN_ARM_ERROR => {
                self.non_arm_failures.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }
    }
}
