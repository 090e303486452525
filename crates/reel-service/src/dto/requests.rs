//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate`; field names are camelCase
//! on the wire.

use reel_core::Snowflake;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Feed
// ============================================================================

/// Raw `GET /feed` query parameters
///
/// Both are kept as strings: `limit` is interpreted leniently and `cursor`
/// strictly, so neither may fail at extraction time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
    pub limit: Option<String>,
    pub cursor: Option<String>,
}

// ============================================================================
// Postings
// ============================================================================

/// Create posting request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostingRequest {
    #[validate(length(max = 2200, message = "Caption must be at most 2200 characters"))]
    pub caption: Option<String>,

    #[validate(url(message = "mediaUrl must be a valid URL"))]
    pub media_url: Option<String>,

    #[validate(url(message = "thumbnailUrl must be a valid URL"))]
    pub thumbnail_url: Option<String>,

    #[validate(range(min = 0, message = "durationSec must be non-negative"))]
    pub duration_sec: Option<i32>,

    #[validate(length(max = 30, message = "At most 30 tags"))]
    pub tags: Option<Vec<String>>,
}

// ============================================================================
// Engagement
// ============================================================================

/// Like request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub posting_id: Snowflake,
}

/// Follow request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    pub profile_id: Snowflake,
}

/// Comment request
///
/// Length is checked after trimming, in the domain.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub posting_id: Snowflake,

    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}

/// Watch event request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WatchRequest {
    pub posting_id: Snowflake,

    #[validate(range(
        min = 0,
        max = 2_147_483_647,
        message = "watchTimeMs must be a non-negative number"
    ))]
    pub watch_time_ms: i64,

    #[serde(default)]
    pub completed: bool,
}
