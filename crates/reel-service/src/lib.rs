//! # reel-service
//!
//! Application layer containing the feed assembly pipeline, engagement use
//! cases, and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    EngagementService, FeedRequest, FeedService, PostingService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
