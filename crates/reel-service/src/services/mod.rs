//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod engagement;
pub mod error;
pub mod feed;
pub mod posting;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use engagement::EngagementService;
pub use error::{ServiceError, ServiceResult};
pub use feed::{FeedRequest, FeedService};
pub use posting::PostingService;
