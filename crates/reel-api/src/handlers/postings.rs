//! Posting handlers

use axum::{
    extract::{Path, State},
    Json,
};
use reel_service::{CreatePostingRequest, PostingResponse, PostingService};

use crate::extractors::{AuthUser, PostingIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create posting
///
/// POST /postings
pub async fn create_posting(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostingRequest>,
) -> ApiResult<Created<Json<PostingResponse>>> {
    let service = PostingService::new(state.service_context());
    let response = service.create(auth.profile_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get posting by ID
///
/// GET /postings/{posting_id}
pub async fn get_posting(
    State(state): State<AppState>,
    Path(path): Path<PostingIdPath>,
) -> ApiResult<Json<PostingResponse>> {
    let service = PostingService::new(state.service_context());
    let response = service.get(path.posting_id()?).await?;
    Ok(Json(response))
}
