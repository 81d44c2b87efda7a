//! Request DTOs for API endpoints

use serde::Deserialize;
use validator::Validate;

/// Invitation verification request
///
/// The code is optional at the type level so an absent field reaches
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    #[validate(
        required(message = "Invitation code is required"),
        length(min = 1, message = "Invitation code must not be empty")
    )]
    pub invitation_code: Option<String>,
}

impl VerifyRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            invitation_code: Some(code.into()),
        }
    }
}
