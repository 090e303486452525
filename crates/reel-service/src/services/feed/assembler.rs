//! Page assembler
//!
//! Merges planned rows, aggregates, and viewer flags into the response,
//! preserving the planner's order, and derives the next cursor.

use reel_core::entities::PostingWithCreator;
use reel_core::FeedCursor;

use crate::dto::{CreatorView, FeedItemView, FeedResponse};

use super::aggregation::PageAggregates;
use super::personalization::ViewerContext;

/// Build the response page
///
/// `next_cursor` encodes the last row's position only when the page is full
/// (`rows.len() == limit`); a short page is the last one.
pub fn assemble(
    rows: Vec<PostingWithCreator>,
    aggregates: &PageAggregates,
    viewer: Option<&ViewerContext>,
    limit: i64,
) -> FeedResponse {
    let next_cursor = match rows.last() {
        Some(last) if rows.len() as i64 == limit => {
            Some(FeedCursor::encode(&last.position()).into_string())
        }
        _ => None,
    };

    let items = rows
        .into_iter()
        .map(|row| item_view(row, aggregates, viewer))
        .collect();

    FeedResponse { items, next_cursor }
}

fn item_view(
    row: PostingWithCreator,
    aggregates: &PageAggregates,
    viewer: Option<&ViewerContext>,
) -> FeedItemView {
    let creator = CreatorView::from(&row.creator);
    let posting = row.posting;

    FeedItemView {
        id: posting.id.to_string(),
        caption: posting.caption,
        media_url: posting.media_url,
        thumbnail_url: posting.thumbnail_url,
        duration_sec: posting.duration_sec,
        tags: posting.tags,
        created_at: posting.created_at,
        creator,
        like_count: aggregates.like_count(posting.id),
        comment_count: aggregates.comment_count(posting.id),
        viewer_has_liked: viewer.map(|v| v.has_liked(posting.id)),
        viewer_follows_creator: viewer.map(|v| v.follows(row.creator.id)),
    }
}
