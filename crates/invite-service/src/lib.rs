//! # invite-service
//!
//! Application layer containing the redemption use case, its dependency
//! container, and the request/response DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    HealthChecks, HealthResponse, MethodNotAllowedResponse, ReadinessResponse, VerifyRequest,
    VerifyResponse,
};
pub use services::{
    RedemptionOutcome, RedemptionService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
