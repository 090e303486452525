//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use reel_core::Snowflake;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated viewer extracted from JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Profile ID from the JWT token
    pub profile_id: Snowflake,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(profile_id: Snowflake) -> Self {
        Self { profile_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    if e.is_missing() {
                        ApiError::MissingAuth
                    } else {
                        ApiError::InvalidAuthFormat
                    }
                })?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::App(e)
            })?;

        let profile_id = claims.profile_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid profile ID in token");
            ApiError::App(e)
        })?;

        Ok(AuthUser::new(profile_id))
    }
}

/// Optional authenticated viewer
///
/// `None` when no Authorization header is present. A header that is present
/// but does not carry a valid bearer token is rejected, never ignored.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// Profile ID of the viewer, if signed in
    pub fn profile_id(&self) -> Option<Snowflake> {
        self.0.as_ref().map(|user| user.profile_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(OptionalAuthUser(None));
        }

        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(OptionalAuthUser(Some(user)))
    }
}
