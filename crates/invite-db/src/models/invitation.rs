//! Invitation database model

use sqlx::FromRow;

/// Database model for the invitation codes table
///
/// `used` is nullable: a row created without the attribute has never been redeemed.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct InvitationModel {
    pub code: String,
    pub used: Option<bool>,
}

impl InvitationModel {
    /// Check if the row carries an explicit `used = true`
    #[inline]
    pub fn is_used(&self) -> bool {
        self.used.unwrap_or(false)
    }
}
