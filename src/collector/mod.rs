//! Collector capability for request lifecycle telemetry
//!
//! A collector receives one `request_started` notification per call,
//! followed by exactly one of `request_completed` or `request_failed`.
//! Callbacks are side-effect only; they cannot influence the call outcome.
//!
//! Two implementations ship with the crate:
//!
//! - `LoggingCollector`: structured tracing events
//! - `MetricsCollector`: lock-free in-process counters

pub mod logging;
pub use logging::LoggingCollector;

pub mod metrics;
pub use metrics::MetricsCollector;

use reqwest::Request;

use crate::error::ArmError;
use crate::pipeline::Response;

/// Observer interface collectors implement.
///
/// Implementations are shared across concurrent in-flight requests and must
/// be `Send + Sync`. They should return quickly; the policy awaits nothing
/// from them, but the callbacks run on the request path.
pub trait RequestCollector: Send + Sync {
    /// Called when a request is about to be sent.
    fn request_started(&self, request: &Request);

    /// Called when a request finished with a non-error status (< 400).
    fn request_completed(&self, request: &Request, response: &Response);

    /// Called when a request failed, either in transit or with a 4xx/5xx
    /// status. `response` is `None` exactly when delegation itself failed
    /// before producing one.
    fn request_failed(&self, request: &Request, response: Option<&Response>, error: &ArmError);
}
