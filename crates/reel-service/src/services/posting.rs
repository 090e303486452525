//! Posting service
//!
//! Publishes postings into the feed and reads single postings back.

use reel_core::entities::{Posting, PostingWithCreator};
use reel_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreatePostingRequest, PostingResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Posting service
pub struct PostingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostingService<'a> {
    /// Create a new PostingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish a posting as the viewer
    ///
    /// The posting gets a fresh id and the current time, so it sorts ahead of
    /// every posting already in the feed.
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        viewer_id: Snowflake,
        request: CreatePostingRequest,
    ) -> ServiceResult<PostingResponse> {
        let creator = self
            .ctx
            .profile_repo()
            .find_by_id(viewer_id)
            .await?
            .ok_or(DomainError::ProfileNotFound(viewer_id))?;

        let tags = request.tags.unwrap_or_default();
        if tags.len() > Posting::MAX_TAGS {
            return Err(DomainError::ValidationError(format!(
                "At most {} tags",
                Posting::MAX_TAGS
            ))
            .into());
        }

        let mut posting = Posting::new(self.ctx.generate_id(), viewer_id);
        posting.caption = request.caption.filter(|c| !c.trim().is_empty());
        posting.media_url = request.media_url;
        posting.thumbnail_url = request.thumbnail_url;
        posting.duration_sec = request.duration_sec;
        posting.tags = tags;

        self.ctx.posting_repo().create(&posting).await?;

        info!(posting_id = %posting.id, creator_id = %viewer_id, "Posting created");

        Ok(PostingResponse::from(PostingWithCreator {
            posting,
            creator: creator.summary(),
        }))
    }

    /// Get a single posting with its creator
    #[instrument(skip(self))]
    pub async fn get(&self, posting_id: Snowflake) -> ServiceResult<PostingResponse> {
        let row = self
            .ctx
            .posting_repo()
            .find_by_id(posting_id)
            .await?
            .ok_or(DomainError::PostingNotFound(posting_id))?;

        Ok(PostingResponse::from(row))
    }
}
