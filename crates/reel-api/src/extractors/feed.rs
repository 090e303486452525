//! Feed query extractor
//!
//! Reads `limit` and `cursor` as raw strings. Interpreting them (lenient
//! limit, strict cursor) is left to the feed service.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use reel_service::FeedQuery;

use crate::response::ApiError;

/// Raw feed query parameters
#[derive(Debug, Clone, Default)]
pub struct FeedParams(pub FeedQuery);

#[async_trait]
impl<S> FromRequestParts<S> for FeedParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<FeedQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(FeedParams(query))
    }
}
