//! Normalized ARM error identity
//!
//! Azure Resource Manager reports failures as a JSON envelope of the form
//! `{"error": {"code": ..., "message": ...}}`. This module extracts that
//! envelope into the `{code, message}` pair collectors receive, and defines
//! the sentinel codes used when no upstream code is available.

use serde::{Deserialize, Serialize};

/// Sentinel codes reported when a failure carries no upstream ARM code.
pub mod codes {
    /// Pipeline delegation itself failed (DNS, dial, TLS, timeout, cancellation).
    pub const TRANSPORT_ERROR: &str = "TransportError";

    /// The transport produced neither a response nor an error.
    pub const UNEXPECTED_TRANSPORT_BEHAVIOR: &str = "UnexpectedTransportBehavior";

    /// A 4xx/5xx response whose body is not in ARM error form.
    pub const NOT_AN_ARM_ERROR: &str = "NotAnArmError";
}

/// Unified error experience across Azure Resource Manager: code and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmError {
    /// Service-assigned error code, e.g. `InvalidSubscriptionId`
    #[serde(default)]
    pub code: String,

    /// Human-readable description of the failure
    #[serde(default)]
    pub message: String,
}

/// Internal type, to extract an ArmError from a response body.
#[derive(Debug, Deserialize)]
struct ArmErrorEnvelope {
    error: ArmError,
}

impl ArmError {
    /// Create an error with the given code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Transport-level failure carrying the underlying error text.
    pub fn transport_error(message: impl Into<String>) -> Self {
        Self::new(codes::TRANSPORT_ERROR, message)
    }

    /// Contract violation: the transport returned nothing at all.
    pub fn unexpected_transport_behavior(message: impl Into<String>) -> Self {
        Self::new(codes::UNEXPECTED_TRANSPORT_BEHAVIOR, message)
    }

    /// A 4xx/5xx response carried no conformant envelope.
    pub fn not_an_arm_error() -> Self {
        Self::new(
            codes::NOT_AN_ARM_ERROR,
            "Response body is not in ARM error form: {error:{code, message}}",
        )
    }

    /// Parse the ARM error envelope out of a response body.
    ///
    /// Returns `None` for anything that is not a conformant envelope:
    /// invalid JSON, a different shape, or an envelope without a code.
    pub fn from_error_body(body: &[u8]) -> Option<ArmError> {
        let envelope: ArmErrorEnvelope = serde_json::from_slice(body).ok()?;
        if envelope.error.code.is_empty() {
            return None;
        }
        Some(envelope.error)
    }
}
