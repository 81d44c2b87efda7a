//! Redemption service
//!
//! Verifies an invitation code, consumes it with a conditional write, and
//! issues a session token for the consumed code.

use invite_common::IssuedToken;
use invite_core::entities::InvitationCode;
use invite_core::traits::MarkOutcome;
use invite_core::value_objects::{LookupStrategy, ScanRange};
use invite_core::DomainError;
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::dto::VerifyRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Business outcome of a redemption attempt
#[derive(Debug, Clone)]
pub enum RedemptionOutcome {
    /// The code was consumed by this call
    Redeemed(IssuedToken),
    /// No row exists for the code
    InvalidCode,
    /// The code was consumed earlier, or by a concurrent call
    AlreadyUsed,
}

impl RedemptionOutcome {
    /// Machine-readable reason for the API body
    pub fn code(&self) -> &'static str {
        match self {
            Self::Redeemed(_) => "VERIFIED",
            Self::InvalidCode => "INVALID_CODE",
            Self::AlreadyUsed => "ALREADY_USED",
        }
    }

    pub fn is_redeemed(&self) -> bool {
        matches!(self, Self::Redeemed(_))
    }
}

/// Redemption service
pub struct RedemptionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RedemptionService<'a> {
    /// Create a new RedemptionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Redeem the code carried by a verify request
    ///
    /// A missing or empty code fails with `ServiceError::MissingInput`
    /// before the store is touched.
    #[instrument(skip(self, request))]
    pub async fn redeem(&self, request: VerifyRequest) -> ServiceResult<RedemptionOutcome> {
        if request.validate().is_err() {
            return Err(ServiceError::MissingInput);
        }
        match request.invitation_code {
            Some(code) => self.redeem_code(&code).await,
            None => Err(ServiceError::MissingInput),
        }
    }

    /// Redeem a raw code
    #[instrument(skip(self))]
    pub async fn redeem_code(&self, code: &str) -> ServiceResult<RedemptionOutcome> {
        if code.is_empty() {
            return Err(ServiceError::MissingInput);
        }

        let Some(invitation) = self.lookup(code).await? else {
            info!(code = %code, "Unknown invitation code");
            return Ok(RedemptionOutcome::InvalidCode);
        };

        if !invitation.is_redeemable() {
            info!(code = %code, "Invitation code already used");
            return Ok(RedemptionOutcome::AlreadyUsed);
        }

        // Write against the key the lookup returned, never the raw input
        match self.ctx.store().mark_used(&invitation.key).await? {
            MarkOutcome::Applied => {}
            MarkOutcome::AlreadyUsed => {
                warn!(code = %code, "Lost redemption race");
                return Ok(RedemptionOutcome::AlreadyUsed);
            }
            MarkOutcome::Missing => {
                warn!(code = %code, "Invitation row vanished before mark");
                return Ok(RedemptionOutcome::InvalidCode);
            }
        }

        let issued = self.ctx.jwt_service().issue(&invitation.code).map_err(|e| {
            error!(code = %code, error = %e, "Token signing failed after code was consumed");
            ServiceError::from(e)
        })?;

        info!(code = %code, expires_in = issued.expires_in, "Invitation code redeemed");

        Ok(RedemptionOutcome::Redeemed(issued))
    }

    async fn lookup(&self, code: &str) -> ServiceResult<Option<InvitationCode>> {
        match self.ctx.lookup() {
            LookupStrategy::PointGet => Ok(self.ctx.store().get(code).await?),
            LookupStrategy::RangeScan => {
                let mut rows = self.ctx.store().scan(&ScanRange::for_code(code)).await?;
                if rows.len() > 1 {
                    error!(code = %code, rows = rows.len(), "Range scan matched several rows");
                    return Err(DomainError::IntegrityViolation {
                        code: code.to_string(),
                        rows: rows.len(),
                    }
                    .into());
                }
                Ok(rows.pop())
            }
        }
    }
}
