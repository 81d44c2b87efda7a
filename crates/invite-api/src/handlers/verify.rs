//! Invitation verification handlers
//!
//! `POST /verify` redeems a code; `OPTIONS /verify` answers bare preflights;
//! every other method gets a 405.

use axum::{extract::State, http::StatusCode, Json};
use invite_service::{RedemptionService, VerifyResponse};

use crate::extractors::VerifyBody;
use crate::response::{ApiResult, MethodNotAllowed};
use crate::state::AppState;

/// Redeem an invitation code
///
/// POST /verify
pub async fn verify(
    State(state): State<AppState>,
    VerifyBody(request): VerifyBody,
) -> ApiResult<Json<VerifyResponse>> {
    let service = RedemptionService::new(state.service_context());
    let outcome = service.redeem(request).await?;
    Ok(Json(VerifyResponse::from(outcome)))
}

/// OPTIONS /verify
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> MethodNotAllowed {
    MethodNotAllowed
}
