//! Invitation store trait (port) - defines the interface for row access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::InvitationCode;
use crate::error::DomainError;
use crate::value_objects::{RowKey, ScanRange};

/// Result type for store operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Result of a conditional mark-used write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// `used` flipped from false/absent to true
    Applied,
    /// The row was already used; nothing was written
    AlreadyUsed,
    /// No row exists under the key; nothing was written
    Missing,
}

// ============================================================================
// Invitation Store
// ============================================================================

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait InvitationStore: Send + Sync {
    /// Find an invitation by exact primary key
    async fn get(&self, code: &str) -> RepoResult<Option<InvitationCode>>;

    /// Scan invitations whose key lies in `[range.start, range.end)`.
    ///
    /// Implementations may stop after two rows: callers only need to tell
    /// "none", "one" and "more than one" apart.
    async fn scan(&self, range: &ScanRange) -> RepoResult<Vec<InvitationCode>>;

    /// Set `used = true` only if it is currently false or absent
    async fn mark_used(&self, key: &RowKey) -> RepoResult<MarkOutcome>;

    /// Check store connectivity
    async fn health_check(&self) -> RepoResult<()>;
}
