//! Invitation entity - a single-use code gating access

use crate::value_objects::RowKey;

/// Invitation code entity
///
/// Rows are created out-of-band. `used` only ever transitions from `false` to
/// `true`, and only through [`crate::InvitationStore::mark_used`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationCode {
    /// Key exactly as the store returned it; used for the conditional write
    pub key: RowKey,
    pub code: String,
    pub used: bool,
}

impl InvitationCode {
    /// Create an unused invitation whose row key is the code itself
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            key: RowKey::new(code.clone()),
            code,
            used: false,
        }
    }

    /// Override the row key (stores whose key encoding differs from the code)
    pub fn with_key(mut self, key: RowKey) -> Self {
        self.key = key;
        self
    }

    /// Set the used flag
    pub fn with_used(mut self, used: bool) -> Self {
        self.used = used;
        self
    }

    /// Check if this invitation can still be redeemed
    pub fn is_redeemable(&self) -> bool {
        !self.used
    }
}
