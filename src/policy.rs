//! Telemetry policy for ARM request pipelines

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Request;

use crate::collector::RequestCollector;
use crate::error::{ArmError, PipelineError, Result};
use crate::pipeline::{PipelineStage, Response};

/// Pipeline policy that reports request lifecycle telemetry for ARM calls.
///
/// The policy wraps the next stage of the pipeline. Around each delegation
/// it notifies the collector: `request_started` before, then exactly one of
/// `request_completed` or `request_failed` after, classified from the
/// outcome. Whatever the next stage produced is returned untouched.
///
/// The policy holds no per-call state, so one instance can be shared across
/// clients and any number of concurrent in-flight requests.
pub struct ArmRequestMetricPolicy {
    next: Arc<dyn PipelineStage>,
    collector: Option<Arc<dyn RequestCollector>>,
}

impl ArmRequestMetricPolicy {
    /// Wrap the next stage. Without a collector every notification is a no-op.
    pub fn new(next: Arc<dyn PipelineStage>) -> Self {
        Self {
            next,
            collector: None,
        }
    }

    /// Attach a collector.
    pub fn with_collector(mut self, collector: Arc<dyn RequestCollector>) -> Self {
        self.collector = Some(collector);
        self
    }

    // shortcut to handle an absent collector
    fn request_started(&self, request: &Request) {
        if let Some(collector) = &self.collector {
            collector.request_started(request);
        }
    }

    // shortcut to handle an absent collector
    fn request_completed(&self, request: &Request, response: &Response) {
        if let Some(collector) = &self.collector {
            collector.request_completed(request, response);
        }
    }

    // shortcut to handle an absent collector
    fn request_failed(&self, request: &Request, response: Option<&Response>, error: &ArmError) {
        if let Some(collector) = &self.collector {
            collector.request_failed(request, response, error);
        }
    }
}

#[async_trait]
impl PipelineStage for ArmRequestMetricPolicy {
    async fn send(&self, request: &Request) -> Result<Response> {
        self.request_started(request);

        let response = match self.next.send(request).await {
            Ok(response) => response,
            Err(err) => {
                let arm_error = match &err {
                    PipelineError::UnexpectedTransportBehavior(message) => {
                        ArmError::unexpected_transport_behavior(message.clone())
                    }
                    // Coarse on purpose; the finer variant still travels on
                    // the returned error.
                    other => ArmError::transport_error(other.to_string()),
                };
                self.request_failed(request, None, &arm_error);
                return Err(err);
            }
        };

        if response.is_error() {
            // 4xx/5xx responses from ARM should carry {error:{code, message}}
            // in the body.
            let arm_error = match ArmError::from_error_body(response.body()) {
                // The richer error assembled by the layers above already
                // carries the message; the code identifies the failure.
                Some(parsed) => ArmError::new(parsed.code, ""),
                None => ArmError::not_an_arm_error(),
            };
            self.request_failed(request, Some(&response), &arm_error);

            // Just an observer: application errors stay with the caller.
            return Ok(response);
        }

        self.request_completed(request, &response);
        Ok(response)
    }
}
