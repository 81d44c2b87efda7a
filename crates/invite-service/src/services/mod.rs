//! Business logic services

pub mod context;
pub mod error;
pub mod redemption;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use redemption::{RedemptionOutcome, RedemptionService};
