//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Feed Responses
// ============================================================================

/// One page of the feed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub items: Vec<FeedItemView>,
    /// Present iff the page was full; always serialized (`null` on the last page)
    pub next_cursor: Option<String>,
}

/// Posting creator as shown on a feed item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatorView {
    pub id: String,
    pub name: String,
    pub photo: Option<String>,
}

/// A posting enriched for display
///
/// The two viewer flags exist only for authenticated viewers. For anonymous
/// viewers they are omitted from the JSON, not serialized as `false`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItemView {
    pub id: String,
    pub caption: Option<String>,
    pub media_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub duration_sec: Option<i32>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub creator: CreatorView,
    pub like_count: i64,
    pub comment_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer_has_liked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer_follows_creator: Option<bool>,
}

// ============================================================================
// Posting Responses
// ============================================================================

/// Single posting with its creator
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingResponse {
    pub id: String,
    pub caption: Option<String>,
    pub media_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub duration_sec: Option<i32>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub creator: CreatorView,
}

// ============================================================================
// Engagement Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub profile_id: String,
    pub posting_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowResponse {
    pub follower_id: String,
    pub following_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub profile_id: String,
    pub posting_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchEventResponse {
    pub id: String,
    pub profile_id: String,
    pub posting_id: String,
    pub watch_time_ms: i32,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Acknowledgement for removals
#[derive(Debug, Clone, Serialize)]
pub struct AckResponse {
    pub message: String,
}

impl AckResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
