//! # ARM Request Telemetry
//!
//! Request lifecycle telemetry for Azure Resource Manager clients.
//!
//! This crate provides:
//!
//! - A pipeline policy that reports started / completed / failed events for
//!   every ARM call it wraps
//! - The collector capability that receives those events
//! - A normalized `{code, message}` failure identity parsed from the
//!   conventional ARM error envelope
//! - The pipeline stage interface the policy composes over, plus a terminal
//!   reqwest-backed transport
//!
//! ## Architecture
//!
//! The crate is designed around the following key abstractions:
//!
//! - `ArmRequestMetricPolicy`: decorator over the next pipeline stage; it
//!   notifies the collector before delegating, classifies the outcome
//!   afterwards, and returns the next stage's result untouched
//! - `RequestCollector`: side-effect-only observer with three callbacks
//! - `ArmError`: unified error experience across Azure Resource Manager
//! - `PipelineStage`: a single "send to the next stage" operation
//!
//! The policy never retries, rewrites, or suppresses anything: a 4xx/5xx
//! response is reported to the collector and still returned as a success of
//! the transport, leaving application-level error handling to the layers
//! above it in the pipeline.

use std::sync::Arc;

// Re-export collector capability and provided implementations
pub mod collector;
pub use collector::{LoggingCollector, MetricsCollector, RequestCollector};

// Re-export error handling
pub mod error;
pub use error::{codes, ArmError, PipelineError, Result};

// Re-export pipeline abstractions
pub mod pipeline;
pub use pipeline::{PipelineStage, ReqwestTransport, Response};

// Re-export the policy itself
pub mod policy;
pub use policy::ArmRequestMetricPolicy;

#[cfg(test)]
mod tests;

/// Create a policy over a default reqwest transport.
pub fn policy() -> ArmRequestMetricPolicy {
    ArmRequestMetricPolicy::new(Arc::new(ReqwestTransport::default()))
}
