//! Integration test utilities for the feed server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with seeded PostgreSQL data.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
