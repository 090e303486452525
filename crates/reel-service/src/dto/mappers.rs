//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use reel_core::entities::{
    Comment, CreatorSummary, Follow, Like, PostingWithCreator, WatchEvent,
};

use super::responses::{
    CommentResponse, CreatorView, FollowResponse, LikeResponse, PostingResponse,
    WatchEventResponse,
};

// ============================================================================
// Posting Mappers
// ============================================================================

impl From<&CreatorSummary> for CreatorView {
    fn from(creator: &CreatorSummary) -> Self {
        Self {
            id: creator.id.to_string(),
            name: creator.name.clone(),
            photo: creator.photo.clone(),
        }
    }
}

impl From<PostingWithCreator> for PostingResponse {
    fn from(row: PostingWithCreator) -> Self {
        let creator = CreatorView::from(&row.creator);
        let posting = row.posting;

        Self {
            id: posting.id.to_string(),
            caption: posting.caption,
            media_url: posting.media_url,
            thumbnail_url: posting.thumbnail_url,
            duration_sec: posting.duration_sec,
            tags: posting.tags,
            created_at: posting.created_at,
            creator,
        }
    }
}

// ============================================================================
// Engagement Mappers
// ============================================================================

impl From<&Like> for LikeResponse {
    fn from(like: &Like) -> Self {
        Self {
            profile_id: like.profile_id.to_string(),
            posting_id: like.posting_id.to_string(),
            created_at: like.created_at,
        }
    }
}

impl From<&Follow> for FollowResponse {
    fn from(follow: &Follow) -> Self {
        Self {
            follower_id: follow.follower_id.to_string(),
            following_id: follow.following_id.to_string(),
            created_at: follow.created_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            profile_id: comment.profile_id.to_string(),
            posting_id: comment.posting_id.to_string(),
            text: comment.text,
            created_at: comment.created_at,
        }
    }
}

impl From<&WatchEvent> for WatchEventResponse {
    fn from(event: &WatchEvent) -> Self {
        Self {
            id: event.id.to_string(),
            profile_id: event.profile_id.to_string(),
            posting_id: event.posting_id.to_string(),
            watch_time_ms: event.watch_time_ms,
            completed: event.completed,
            created_at: event.created_at,
        }
    }
}
