//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what the feed pipeline needs, and the
//! infrastructure layer provides the implementation. Batch methods take the
//! full id set of a page so a page costs a fixed number of queries no matter
//! how many items it holds.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::entities::{Comment, Follow, Like, Posting, PostingWithCreator, Profile, WatchEvent};
use crate::error::DomainError;
use crate::value_objects::{FeedPosition, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Posting Repository
// ============================================================================

#[async_trait]
pub trait PostingRepository: Send + Sync {
    /// Find posting by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<PostingWithCreator>>;

    /// Read one feed page joined with creators, newest first
    ///
    /// With `seek` set, only rows strictly after that position in
    /// `(created_at DESC, id DESC)` order are returned. At most `limit` rows.
    async fn find_page(
        &self,
        seek: Option<FeedPosition>,
        limit: i64,
    ) -> RepoResult<Vec<PostingWithCreator>>;

    /// Create a new posting
    async fn create(&self, posting: &Posting) -> RepoResult<()>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Profile>>;

    /// Create a new profile
    async fn create(&self, profile: &Profile) -> RepoResult<()>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Create a like. Fails with `AlreadyLiked` on a duplicate.
    async fn create(&self, like: &Like) -> RepoResult<()>;

    /// Remove a like. Fails with `LikeNotFound` if none exists.
    async fn delete(&self, profile_id: Snowflake, posting_id: Snowflake) -> RepoResult<()>;

    /// Like counts for a set of postings, in one grouped query
    ///
    /// Postings without likes are absent from the map.
    async fn count_by_postings(&self, posting_ids: &[Snowflake])
        -> RepoResult<HashMap<Snowflake, i64>>;

    /// Subset of `posting_ids` the viewer has liked, in one query
    async fn liked_among(
        &self,
        viewer_id: Snowflake,
        posting_ids: &[Snowflake],
    ) -> RepoResult<HashSet<Snowflake>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Comment counts for a set of postings, in one grouped query
    async fn count_by_postings(&self, posting_ids: &[Snowflake])
        -> RepoResult<HashMap<Snowflake, i64>>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Create a follow. Fails with `AlreadyFollowing` on a duplicate.
    async fn create(&self, follow: &Follow) -> RepoResult<()>;

    /// Remove a follow. Fails with `FollowNotFound` if none exists.
    async fn delete(&self, follower_id: Snowflake, following_id: Snowflake) -> RepoResult<()>;

    /// Subset of `profile_ids` the viewer follows, in one query
    async fn followed_among(
        &self,
        viewer_id: Snowflake,
        profile_ids: &[Snowflake],
    ) -> RepoResult<HashSet<Snowflake>>;
}

// ============================================================================
// Watch Event Repository
// ============================================================================

#[async_trait]
pub trait WatchEventRepository: Send + Sync {
    /// Record a watch event
    async fn create(&self, event: &WatchEvent) -> RepoResult<()>;
}
