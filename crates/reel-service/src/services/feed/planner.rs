//! Seek query planner
//!
//! Turns the request's page size and optional position into one keyset read
//! over the posting log. Page size is lenient (defaulted and clamped); the
//! position has already been strictly decoded by the time it gets here.

use reel_common::FeedConfig;
use reel_core::entities::PostingWithCreator;
use reel_core::traits::{PostingRepository, RepoResult};
use tracing::debug;

use super::FeedRequest;

/// Resolve the raw `limit` query value into a page size
///
/// Missing or non-integer input falls back to the default; integers are
/// clamped into `[1, max_limit]`, and never past `FeedConfig::HARD_MAX_LIMIT`.
/// Never fails.
pub fn resolve_limit(raw: Option<&str>, config: &FeedConfig) -> i64 {
    let max = config.max_limit.clamp(1, FeedConfig::HARD_MAX_LIMIT);
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .map_or(config.default_limit.clamp(1, max), |n| n.clamp(1, max))
}

/// Read the page's postings, newest first, joined with their creators
pub async fn plan(
    postings: &dyn PostingRepository,
    request: &FeedRequest,
) -> RepoResult<Vec<PostingWithCreator>> {
    let rows = postings.find_page(request.position, request.limit).await?;
    debug!(rows = rows.len(), limit = request.limit, "Feed page planned");
    Ok(rows)
}
