//! Ports implemented by the infrastructure layer

mod store;

#[cfg(any(test, feature = "mock"))]
pub use store::MockInvitationStore;
pub use store::{InvitationStore, MarkOutcome, RepoResult};
