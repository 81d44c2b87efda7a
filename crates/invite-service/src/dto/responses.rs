//! Response DTOs for API endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::RedemptionOutcome;

/// User-facing messages for the verify endpoint
pub mod messages {
    pub const VERIFIED: &str = "Verification successful.";
    pub const INVALID_CODE: &str = "Invalid invitation code.";
    pub const ALREADY_USED: &str = "Invitation code has already been used.";
    pub const MISSING_INPUT: &str = "Please provide an invitation code.";
    pub const SERVER_ERROR: &str = "Server error, please try again later.";
    pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
}

// ============================================================================
// Verify Responses
// ============================================================================

/// Body of every `/verify` response except 405
#[derive(Debug, Clone, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Stable machine-readable reason, present on failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl VerifyResponse {
    pub fn verified(token: impl Into<String>) -> Self {
        Self {
            success: true,
            message: messages::VERIFIED.to_string(),
            token: Some(token.into()),
            code: None,
        }
    }

    pub fn failure(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            token: None,
            code: Some(code.into()),
        }
    }
}

impl From<RedemptionOutcome> for VerifyResponse {
    fn from(outcome: RedemptionOutcome) -> Self {
        let code = outcome.code();
        match outcome {
            RedemptionOutcome::Redeemed(issued) => Self::verified(issued.token),
            RedemptionOutcome::InvalidCode => Self::failure(messages::INVALID_CODE, code),
            RedemptionOutcome::AlreadyUsed => Self::failure(messages::ALREADY_USED, code),
        }
    }
}

/// Body of a 405 response
#[derive(Debug, Clone, Serialize)]
pub struct MethodNotAllowedResponse {
    pub message: String,
}

impl Default for MethodNotAllowedResponse {
    fn default() -> Self {
        Self {
            message: messages::METHOD_NOT_ALLOWED.to_string(),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub store: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
