//! Data transfer objects for API requests and responses

pub mod requests;
pub mod responses;

pub use requests::VerifyRequest;
pub use responses::{
    messages, HealthChecks, HealthResponse, MethodNotAllowedResponse, ReadinessResponse,
    VerifyResponse,
};
