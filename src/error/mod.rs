//! Error handling for the telemetry policy
//!
//! This module provides:
//! - `PipelineError`: failures raised by pipeline stages and transports
//! - `ArmError`: the normalized `{code, message}` pair reported to collectors
//! - Parsing of the conventional ARM error envelope from response bodies

use thiserror::Error;

pub mod arm;
pub use arm::{codes, ArmError};

/// Result type for pipeline stage operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Failures produced while delegating a request to the rest of the pipeline.
///
/// The variants keep reqwest's own classification visible to callers; the
/// telemetry policy reports all of them under the coarse `TransportError`
/// code except `UnexpectedTransportBehavior`, which gets its own code.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The request could not be handed to the transport
    #[error("Request error: {0}")]
    Request(String),

    /// Connection-level failures (DNS, dial, TLS)
    #[error("Connection error: {0}")]
    Connect(String),

    /// The request exceeded the client timeout
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// The response body could not be read off the wire
    #[error("Body error: {0}")]
    Body(String),

    /// A transport produced neither a response nor an error
    #[error("Unexpected transport behavior: {0}")]
    UnexpectedTransportBehavior(String),

    /// Transport failures with no finer classification
    #[error("Transport error: {0}")]
    Transport(String),
}

impl PipelineError {
    /// Create a request error
    pub fn request(message: impl Into<String>) -> Self {
        PipelineError::Request(message.into())
    }

    /// Create a connection error
    pub fn connect(message: impl Into<String>) -> Self {
        PipelineError::Connect(message.into())
    }

    /// Create a timeout error
    pub fn timeout(message: impl Into<String>) -> Self {
        PipelineError::Timeout(message.into())
    }

    /// Create a body error
    pub fn body(message: impl Into<String>) -> Self {
        PipelineError::Body(message.into())
    }

    /// Create an unexpected transport behavior error
    pub fn unexpected_transport_behavior(message: impl Into<String>) -> Self {
        PipelineError::UnexpectedTransportBehavior(message.into())
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        PipelineError::Transport(message.into())
    }
}

/// Convert reqwest errors to PipelineError
impl From<reqwest::Error> for PipelineError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PipelineError::timeout(err.to_string())
        } else if err.is_connect() {
            PipelineError::connect(err.to_string())
        } else if err.is_request() {
            PipelineError::request(err.to_string())
        } else if err.is_body() || err.is_decode() {
            PipelineError::body(err.to_string())
        } else {
            PipelineError::transport(err.to_string())
        }
    }
}
