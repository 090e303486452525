//! Feed handlers

use axum::{extract::State, Json};
use reel_service::{FeedResponse, FeedService};

use crate::extractors::{FeedParams, OptionalAuthUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get one page of the global feed
///
/// GET /feed?limit=&cursor=
///
/// Anonymous requests get counts only; signed-in viewers also get
/// `viewerHasLiked` and `viewerFollowsCreator` on every item.
pub async fn get_feed(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    FeedParams(query): FeedParams,
) -> ApiResult<Json<FeedResponse>> {
    let service = FeedService::new(state.service_context());
    let page = service.get_feed(&query, viewer.profile_id()).await?;
    Ok(Json(page))
}
