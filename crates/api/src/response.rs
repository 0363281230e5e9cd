//! Shared response envelope types for API handlers.
//!
//! Every enveloped response carries a `status` discriminator, a `data`
//! payload (non-null only on success), and an `error` descriptor
//! (non-null only on failure). Use [`ApiResponse`] instead of ad-hoc
//! `serde_json::json!` so the envelope shape stays uniform.

use serde::Serialize;

/// Error descriptor carried by failure envelopes.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Numeric code, mirroring the HTTP status.
    pub code: u16,
    pub message: String,
}

/// Standard response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// `"success"` or `"failure"`.
    pub status: &'static str,
    pub data: Option<T>,
    pub error: Option<ErrorDetail>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a payload in a success envelope.
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Build a failure envelope with the given code and message.
    pub fn failure(code: u16, message: String) -> Self {
        Self {
            status: "failure",
            data: None,
            error: Some(ErrorDetail { code, message }),
        }
    }
}
