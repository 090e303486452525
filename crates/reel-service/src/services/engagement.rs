//! Engagement service
//!
//! Likes, follows, comments and watch events. These feed the counters and
//! viewer flags the feed pipeline reads back.

use reel_core::entities::{Comment, Follow, Like, WatchEvent};
use reel_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CommentRequest, CommentResponse, FollowResponse, LikeResponse, WatchEventResponse,
    WatchRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Engagement service
pub struct EngagementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EngagementService<'a> {
    /// Create a new EngagementService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like a posting
    ///
    /// # Errors
    /// `PostingNotFound` for an unknown posting, `AlreadyLiked` on a repeat
    #[instrument(skip(self))]
    pub async fn like(
        &self,
        viewer_id: Snowflake,
        posting_id: Snowflake,
    ) -> ServiceResult<LikeResponse> {
        self.require_posting(posting_id).await?;

        let like = Like::new(viewer_id, posting_id);
        self.ctx.like_repo().create(&like).await?;

        info!(profile_id = %viewer_id, posting_id = %posting_id, "Posting liked");

        Ok(LikeResponse::from(&like))
    }

    /// Remove a like
    #[instrument(skip(self))]
    pub async fn unlike(&self, viewer_id: Snowflake, posting_id: Snowflake) -> ServiceResult<()> {
        self.ctx.like_repo().delete(viewer_id, posting_id).await?;

        info!(profile_id = %viewer_id, posting_id = %posting_id, "Posting unliked");

        Ok(())
    }

    /// Follow a profile
    ///
    /// # Errors
    /// `CannotFollowSelf`, `ProfileNotFound` or `AlreadyFollowing`
    #[instrument(skip(self))]
    pub async fn follow(
        &self,
        viewer_id: Snowflake,
        profile_id: Snowflake,
    ) -> ServiceResult<FollowResponse> {
        let follow = Follow::new(viewer_id, profile_id)?;

        if self.ctx.profile_repo().find_by_id(profile_id).await?.is_none() {
            return Err(DomainError::ProfileNotFound(profile_id).into());
        }

        self.ctx.follow_repo().create(&follow).await?;

        info!(follower_id = %viewer_id, following_id = %profile_id, "Profile followed");

        Ok(FollowResponse::from(&follow))
    }

    /// Stop following a profile
    #[instrument(skip(self))]
    pub async fn unfollow(&self, viewer_id: Snowflake, profile_id: Snowflake) -> ServiceResult<()> {
        self.ctx.follow_repo().delete(viewer_id, profile_id).await?;

        info!(follower_id = %viewer_id, following_id = %profile_id, "Profile unfollowed");

        Ok(())
    }

    /// Comment on a posting
    #[instrument(skip(self, request), fields(posting_id = %request.posting_id))]
    pub async fn comment(
        &self,
        viewer_id: Snowflake,
        request: CommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let comment = Comment::new(
            self.ctx.generate_id(),
            viewer_id,
            request.posting_id,
            &request.text,
        )?;
        self.require_posting(comment.posting_id).await?;

        self.ctx.comment_repo().create(&comment).await?;

        info!(
            comment_id = %comment.id,
            profile_id = %viewer_id,
            posting_id = %comment.posting_id,
            "Comment created"
        );

        Ok(CommentResponse::from(comment))
    }

    /// Record how long the viewer watched a posting
    #[instrument(skip(self, request), fields(posting_id = %request.posting_id))]
    pub async fn watch(
        &self,
        viewer_id: Snowflake,
        request: WatchRequest,
    ) -> ServiceResult<WatchEventResponse> {
        let watch_time_ms = i32::try_from(request.watch_time_ms)
            .map_err(|_| ServiceError::validation("watchTimeMs is out of range"))?;
        let event = WatchEvent::new(
            self.ctx.generate_id(),
            viewer_id,
            request.posting_id,
            watch_time_ms,
            request.completed,
        )?;
        self.require_posting(event.posting_id).await?;

        self.ctx.watch_event_repo().create(&event).await?;

        info!(
            profile_id = %viewer_id,
            posting_id = %event.posting_id,
            watch_time_ms,
            completed = event.completed,
            "Watch event recorded"
        );

        Ok(WatchEventResponse::from(&event))
    }

    async fn require_posting(&self, posting_id: Snowflake) -> ServiceResult<()> {
        match self.ctx.posting_repo().find_by_id(posting_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::PostingNotFound(posting_id).into()),
        }
    }
}
