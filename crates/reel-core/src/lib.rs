//! # reel-core
//!
//! Domain layer containing entities, value objects, the feed cursor codec, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, CreatorSummary, Follow, Like, Posting, PostingWithCreator, Profile, WatchEvent,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, FollowRepository, LikeRepository, PostingRepository, ProfileRepository,
    RepoResult, WatchEventRepository,
};
pub use value_objects::{
    FeedCursor, FeedPosition, Snowflake, SnowflakeGenerator, SnowflakeParseError,
};
