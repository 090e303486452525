//! Feed service
//!
//! Assembles one page of the global feed in three stages:
//!
//! 1. [`planner`] reads up to `limit` postings after the request's position,
//!    joined with their creators (one query).
//! 2. [`aggregation`] and [`personalization`] run concurrently over the page's
//!    ids: two grouped count queries, plus two membership queries when the
//!    viewer is signed in.
//! 3. [`assembler`] merges everything in planner order and derives the cursor.
//!
//! Any failing query fails the whole page; there is no partial response.

pub mod aggregation;
pub mod assembler;
pub mod personalization;
pub mod planner;

use reel_common::FeedConfig;
use reel_core::{FeedCursor, FeedPosition, Snowflake};
use tracing::{error, instrument, warn};

use crate::dto::{FeedQuery, FeedResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Immutable per-request context passed down the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    /// Page size, already defaulted and clamped
    pub limit: i64,
    /// Decoded seek position; `None` starts at the newest posting
    pub position: Option<FeedPosition>,
    /// Authenticated viewer's profile, `None` when anonymous
    pub viewer: Option<Snowflake>,
}

impl FeedRequest {
    /// Build a request from raw query parameters
    ///
    /// An empty `cursor` means "first page". Any other cursor must decode.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidCursor` for a malformed cursor
    pub fn from_query(
        query: &FeedQuery,
        viewer: Option<Snowflake>,
        config: &FeedConfig,
    ) -> ServiceResult<Self> {
        let limit = planner::resolve_limit(query.limit.as_deref(), config);
        let position = match query.cursor.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(token) => Some(FeedCursor::decode(token)?),
        };

        Ok(Self {
            limit,
            position,
            viewer,
        })
    }
}

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Serve one feed page from raw query parameters
    #[instrument(skip(self, query, viewer), fields(viewer_id = ?viewer))]
    pub async fn get_feed(
        &self,
        query: &FeedQuery,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<FeedResponse> {
        let result = match FeedRequest::from_query(query, viewer, self.ctx.feed_config()) {
            Ok(request) => self.get_page(&request).await,
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            let cursor = query.cursor.as_deref().unwrap_or_default();
            let limit = query.limit.as_deref().unwrap_or_default();
            if e.is_client_error() {
                warn!(cursor, limit, viewer_id = ?viewer, error = %e, "Feed request rejected");
            } else {
                error!(cursor, limit, viewer_id = ?viewer, error = %e, "Feed request failed");
            }
        }

        result
    }

    /// Run the pipeline for an already-resolved request
    pub async fn get_page(&self, request: &FeedRequest) -> ServiceResult<FeedResponse> {
        let rows = planner::plan(self.ctx.posting_repo(), request).await?;

        let posting_ids: Vec<Snowflake> = rows.iter().map(|row| row.posting.id).collect();
        let mut creator_ids: Vec<Snowflake> = rows.iter().map(|row| row.creator.id).collect();
        creator_ids.sort_unstable();
        creator_ids.dedup();

        let (aggregates, viewer) = tokio::try_join!(
            aggregation::collect(self.ctx.like_repo(), self.ctx.comment_repo(), &posting_ids),
            personalization::resolve(
                self.ctx.like_repo(),
                self.ctx.follow_repo(),
                request.viewer,
                &posting_ids,
                &creator_ids,
            ),
        )?;

        Ok(assembler::assemble(
            rows,
            &aggregates,
            viewer.as_ref(),
            request.limit,
        ))
    }
}
