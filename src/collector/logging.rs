//! Collector that emits structured tracing events

use reqwest::Request;
use tracing::{debug, warn};

use super::RequestCollector;
use crate::error::ArmError;
use crate::pipeline::Response;

/// Emits one `tracing` event per lifecycle notification.
///
/// Completed calls log at debug, failures at warn. Pair it with
/// `MetricsCollector` in deployments that scrape counters.
#[derive(Debug, Clone, Default)]
pub struct LoggingCollector;

impl LoggingCollector {
    pub fn new() -> Self {
        Self
    }
}

impl RequestCollector for LoggingCollector {
    fn request_started(&self, request: &Request) {
        debug!(
            method = %request.method(),
            url = %request.url(),
            "request started"
        );
    }

    fn request_completed(&self, request: &Request, response: &Response) {
        debug!(
            method = %request.method(),
            url = %request.url(),
            status = response.status().as_u16(),
            "request completed"
        );
    }

    fn request_failed(&self, request: &Request, response: Option<&Response>, error: &ArmError) {
        warn!(
            method = %request.method(),
            url = %request.url(),
            status = response.map(|r| r.status().as_u16()),
            code = %error.code,
            message = %error.message,
            "request failed"
        );
    }
}
