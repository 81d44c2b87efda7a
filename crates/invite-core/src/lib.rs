//! # invite-core
//!
//! Domain layer containing the invitation entity, lookup value objects, and the
//! row store port. This crate has zero dependencies on infrastructure (database,
//! web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::InvitationCode;
pub use error::DomainError;
#[cfg(any(test, feature = "mock"))]
pub use traits::MockInvitationStore;
pub use traits::{InvitationStore, MarkOutcome, RepoResult};
pub use value_objects::{LookupStrategy, LookupStrategyParseError, RowKey, ScanRange};
