//! Axum extractors for request handling

mod verify_body;

pub use verify_body::VerifyBody;
