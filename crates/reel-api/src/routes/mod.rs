//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{engagement, feed, health, postings};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(feed_routes())
        .merge(posting_routes())
        .merge(engagement_routes())
}

/// Feed routes
fn feed_routes() -> Router<AppState> {
    Router::new().route("/feed", get(feed::get_feed))
}

/// Posting routes
fn posting_routes() -> Router<AppState> {
    Router::new()
        .route("/postings", post(postings::create_posting))
        .route("/postings/:posting_id", get(postings::get_posting))
}

/// Engagement routes
fn engagement_routes() -> Router<AppState> {
    Router::new()
        .route("/engagement/like", post(engagement::like_posting))
        .route("/engagement/like/:posting_id", delete(engagement::unlike_posting))
        .route("/engagement/follow", post(engagement::follow_profile))
        .route("/engagement/follow/:profile_id", delete(engagement::unfollow_profile))
        .route("/engagement/comment", post(engagement::add_comment))
        .route("/engagement/watch", post(engagement::record_watch))
}
