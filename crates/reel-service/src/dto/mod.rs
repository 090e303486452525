//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs (camelCase on the wire)
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CommentRequest, CreatePostingRequest, FeedQuery, FollowRequest, LikeRequest, WatchRequest,
};

// Re-export commonly used response types
pub use responses::{
    AckResponse, CommentResponse, CreatorView, FeedItemView, FeedResponse, FollowResponse,
    HealthChecks, HealthResponse, LikeResponse, PostingResponse, ReadinessResponse,
    WatchEventResponse,
};
