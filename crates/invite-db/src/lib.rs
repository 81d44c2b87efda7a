//! # invite-db
//!
//! Row store layer implementing `InvitationStore` from `invite-core`.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Row model with SQLx `FromRow` derive
//! - Row ↔ entity decoding (a missing `used` attribute decodes to `false`)
//! - PostgreSQL store with a conditional mark-used write
//! - In-memory store with the same semantics, for local runs and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use invite_db::{create_pool, PgInvitationStore, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PoolConfig::new("postgres://localhost/invites").with_connections(1, 10);
//!     let pool = create_pool(&config).await?;
//!     let store = PgInvitationStore::new(pool, "invitation_codes")?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod stores;

// Re-export commonly used types
pub use pool::{create_lazy_pool, create_pool, PgPool, PoolConfig};
pub use stores::{MemoryInvitationStore, PgInvitationStore, TableName};
