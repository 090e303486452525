//! Engagement handlers
//!
//! Likes, follows, comments and watch events. All require a signed-in viewer.

use axum::{
    extract::{Path, State},
    Json,
};
use reel_service::{
    AckResponse, CommentRequest, CommentResponse, EngagementService, FollowRequest,
    FollowResponse, LikeRequest, LikeResponse, WatchEventResponse, WatchRequest,
};

use crate::extractors::{AuthUser, PostingIdPath, ProfileIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Like a posting
///
/// POST /engagement/like
pub async fn like_posting(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<LikeRequest>,
) -> ApiResult<Created<Json<LikeResponse>>> {
    let service = EngagementService::new(state.service_context());
    let response = service.like(auth.profile_id, request.posting_id).await?;
    Ok(Created(Json(response)))
}

/// Remove own like
///
/// DELETE /engagement/like/{posting_id}
pub async fn unlike_posting(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostingIdPath>,
) -> ApiResult<Json<AckResponse>> {
    let service = EngagementService::new(state.service_context());
    service.unlike(auth.profile_id, path.posting_id()?).await?;
    Ok(Json(AckResponse::new("Unliked")))
}

/// Follow a profile
///
/// POST /engagement/follow
pub async fn follow_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<FollowRequest>,
) -> ApiResult<Created<Json<FollowResponse>>> {
    let service = EngagementService::new(state.service_context());
    let response = service.follow(auth.profile_id, request.profile_id).await?;
    Ok(Created(Json(response)))
}

/// Unfollow a profile
///
/// DELETE /engagement/follow/{profile_id}
pub async fn unfollow_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ProfileIdPath>,
) -> ApiResult<Json<AckResponse>> {
    let service = EngagementService::new(state.service_context());
    service.unfollow(auth.profile_id, path.profile_id()?).await?;
    Ok(Json(AckResponse::new("Unfollowed")))
}

/// Comment on a posting
///
/// POST /engagement/comment
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = EngagementService::new(state.service_context());
    let response = service.comment(auth.profile_id, request).await?;
    Ok(Created(Json(response)))
}

/// Record a watch event
///
/// POST /engagement/watch
pub async fn record_watch(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<WatchRequest>,
) -> ApiResult<Created<Json<WatchEventResponse>>> {
    let service = EngagementService::new(state.service_context());
    let response = service.watch(auth.profile_id, request).await?;
    Ok(Created(Json(response)))
}
