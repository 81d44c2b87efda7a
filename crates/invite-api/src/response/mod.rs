//! Response types and error handling for API endpoints
//!
//! Every failure leaves the handler as an `ApiError` and is rendered here as
//! the same `{ success, message, code }` body the endpoint uses for business
//! outcomes. Internal detail is logged, never returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use invite_common::AppError;
use invite_core::DomainError;
use invite_service::dto::messages;
use invite_service::{MethodNotAllowedResponse, ServiceError, VerifyResponse};
use thiserror::Error;
use tracing::error;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Missing invitation code")]
    MissingInput,

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::MissingInput => StatusCode::BAD_REQUEST,
            Self::Domain(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::MissingInput => "MISSING_INPUT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// User-facing message for this error
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        if self.status_code().is_client_error() {
            messages::MISSING_INPUT
        } else {
            messages::SERVER_ERROR
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, code = self.error_code(), "Server error occurred");
        }

        let body = VerifyResponse::failure(self.public_message(), self.error_code());
        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// 405 response for unsupported methods
pub struct MethodNotAllowed;

impl IntoResponse for MethodNotAllowed {
    fn into_response(self) -> Response {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(MethodNotAllowedResponse::default()),
        )
            .into_response()
    }
}
