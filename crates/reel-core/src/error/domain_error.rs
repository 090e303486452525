//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Posting not found: {0}")]
    PostingNotFound(Snowflake),

    #[error("Profile not found: {0}")]
    ProfileNotFound(Snowflake),

    #[error("Like not found")]
    LikeNotFound,

    #[error("Follow not found")]
    FollowNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Cannot follow yourself")]
    CannotFollowSelf,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already liked")]
    AlreadyLiked,

    #[error("Already following")]
    AlreadyFollowing,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PostingNotFound(_) => "POSTING_NOT_FOUND",
            Self::ProfileNotFound(_) => "PROFILE_NOT_FOUND",
            Self::LikeNotFound => "LIKE_NOT_FOUND",
            Self::FollowNotFound => "FOLLOW_NOT_FOUND",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidCursor(_) => "INVALID_CURSOR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::CannotFollowSelf => "CANNOT_FOLLOW_SELF",

            // Conflict
            Self::AlreadyLiked => "ALREADY_LIKED",
            Self::AlreadyFollowing => "ALREADY_FOLLOWING",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PostingNotFound(_)
                | Self::ProfileNotFound(_)
                | Self::LikeNotFound
                | Self::FollowNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidCursor(_)
                | Self::ContentTooLong { .. }
                | Self::CannotFollowSelf
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyLiked | Self::AlreadyFollowing)
    }

    /// Check if this error originates from a failed dependency (database, etc.)
    pub fn is_dependency_failure(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }
}
