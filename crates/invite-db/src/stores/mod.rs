//! Store implementations
//!
//! Implementations of the `InvitationStore` port defined in invite-core.

mod error;
mod memory;
mod postgres;
mod table;

pub use memory::MemoryInvitationStore;
pub use postgres::PgInvitationStore;
pub use table::TableName;
