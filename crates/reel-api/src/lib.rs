//! # reel-api
//!
//! REST API server built with the Axum framework. Serves the global feed and
//! the posting and engagement endpoints that populate it.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_app_with_config, run, run_server};
pub use state::AppState;
