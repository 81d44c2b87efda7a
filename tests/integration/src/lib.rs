//! Integration test utilities for the invitation service
//!
//! This crate provides helpers for running end-to-end tests against
//! a real listening server.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
