//! Test fixtures and data generators
//!
//! Provides reusable request and response shapes for integration tests.

use serde::{Deserialize, Serialize};

/// Generate an invitation code no other test run has used
pub fn unique_code(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}

/// Verify request
#[derive(Debug, Serialize)]
pub struct VerifyRequest {
    #[serde(rename = "invitationCode")]
    pub invitation_code: String,
}

impl VerifyRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            invitation_code: code.into(),
        }
    }
}

/// Verify response
#[derive(Debug, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub message: String,
    pub token: Option<String>,
    pub code: Option<String>,
}

/// 405 response body
#[derive(Debug, Deserialize)]
pub struct MethodNotAllowedBody {
    pub message: String,
}

/// Readiness response
#[derive(Debug, Deserialize)]
pub struct ReadinessBody {
    pub status: String,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Deserialize)]
pub struct ReadinessChecks {
    pub store: String,
}
