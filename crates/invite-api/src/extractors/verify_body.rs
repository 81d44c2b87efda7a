//! Lenient JSON extractor for the verify endpoint
//!
//! An absent, empty, or malformed body and a non-string `invitationCode` all
//! collapse into an empty request, which the service rejects as missing input.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use invite_service::VerifyRequest;
use tracing::debug;

use crate::response::ApiError;

/// Verify request body
#[derive(Debug, Clone, Default)]
pub struct VerifyBody(pub VerifyRequest);

#[async_trait]
impl<S> FromRequest<S> for VerifyBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            debug!(error = %e, "Failed to read request body");
            ApiError::MissingInput
        })?;

        if bytes.is_empty() {
            return Ok(Self::default());
        }

        let request = serde_json::from_slice::<VerifyRequest>(&bytes).unwrap_or_else(|e| {
            debug!(error = %e, "Unusable verify body");
            VerifyRequest::default()
        });

        Ok(Self(request))
    }
}
