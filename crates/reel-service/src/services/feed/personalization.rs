//! Personalization resolver
//!
//! Viewer-relative flags for one page. Anonymous viewers get no resolution
//! at all (no queries, and the flags are later omitted from the output).

use std::collections::HashSet;

use reel_core::traits::{FollowRepository, LikeRepository, RepoResult};
use reel_core::Snowflake;

/// What the authenticated viewer has liked and follows, limited to one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerContext {
    liked: HashSet<Snowflake>,
    followed: HashSet<Snowflake>,
}

impl ViewerContext {
    pub fn has_liked(&self, posting_id: Snowflake) -> bool {
        self.liked.contains(&posting_id)
    }

    pub fn follows(&self, creator_id: Snowflake) -> bool {
        self.followed.contains(&creator_id)
    }
}

/// Resolve viewer flags for the page
///
/// Returns `None` for anonymous viewers. For a viewer, issues one query for the
/// liked subset of `posting_ids` and one for the followed subset of
/// `creator_ids`, concurrently. Empty pages issue none.
pub async fn resolve(
    likes: &dyn LikeRepository,
    follows: &dyn FollowRepository,
    viewer: Option<Snowflake>,
    posting_ids: &[Snowflake],
    creator_ids: &[Snowflake],
) -> RepoResult<Option<ViewerContext>> {
    let Some(viewer_id) = viewer else {
        return Ok(None);
    };
    if posting_ids.is_empty() {
        return Ok(Some(ViewerContext::default()));
    }

    let (liked, followed) = tokio::try_join!(
        likes.liked_among(viewer_id, posting_ids),
        follows.followed_among(viewer_id, creator_ids),
    )?;

    Ok(Some(ViewerContext { liked, followed }))
}
