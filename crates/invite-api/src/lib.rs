//! # invite-api
//!
//! REST API server built with Axum framework, serving invitation code
//! verification.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_store, run, run_server};
pub use state::AppState;
