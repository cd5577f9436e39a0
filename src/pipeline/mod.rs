//! Pipeline stage abstractions
//!
//! This module provides the interfaces the telemetry policy composes over:
//!
//! - `PipelineStage`: a single "send to the next stage" operation
//! - `Response`: a buffered HTTP response that can be inspected without
//!   being consumed
//! - `ReqwestTransport`: terminal stage that executes requests with reqwest

pub mod transport;
pub use transport::ReqwestTransport;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Request, StatusCode};

use crate::error::Result;

/// A buffered HTTP response.
///
/// The body is read fully off the wire before the response travels back up
/// the pipeline, so observers can inspect it and the caller still receives
/// it intact.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    /// Assemble a response from its parts.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Whether the status denotes a client or server error (>= 400).
    pub fn is_error(&self) -> bool {
        self.status.as_u16() >= 400
    }
}

/// A single stage of the request pipeline.
///
/// Implementations send the request onward, to another policy or to the
/// terminal transport, and hand back the buffered response. A stage is
/// shared by every in-flight request of a client and must not hold
/// per-call state.
#[async_trait]
pub trait PipelineStage: Send + Sync {
    /// Send the request to the next stage and return its response.
    async fn send(&self, request: &Request) -> Result<Response>;
}
