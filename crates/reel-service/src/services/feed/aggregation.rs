//! Aggregation batcher
//!
//! Like and comment counts for a whole page: one grouped query per counter,
//! run concurrently, never one query per item.

use std::collections::HashMap;

use reel_core::traits::{CommentRepository, LikeRepository, RepoResult};
use reel_core::Snowflake;

/// Per-posting counters for one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageAggregates {
    likes: HashMap<Snowflake, i64>,
    comments: HashMap<Snowflake, i64>,
}

impl PageAggregates {
    /// Like count for a posting, 0 when it has none
    pub fn like_count(&self, posting_id: Snowflake) -> i64 {
        self.likes.get(&posting_id).copied().unwrap_or(0)
    }

    /// Comment count for a posting, 0 when it has none
    pub fn comment_count(&self, posting_id: Snowflake) -> i64 {
        self.comments.get(&posting_id).copied().unwrap_or(0)
    }
}

/// Count likes and comments for the given postings
///
/// An empty id set issues no queries.
pub async fn collect(
    likes: &dyn LikeRepository,
    comments: &dyn CommentRepository,
    posting_ids: &[Snowflake],
) -> RepoResult<PageAggregates> {
    if posting_ids.is_empty() {
        return Ok(PageAggregates::default());
    }

    let (likes, comments) = tokio::try_join!(
        likes.count_by_postings(posting_ids),
        comments.count_by_postings(posting_ids),
    )?;

    Ok(PageAggregates { likes, comments })
}
