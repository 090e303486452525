//! Comment entity - append-only text attached to a posting

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub profile_id: Snowflake,
    pub posting_id: Snowflake,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Maximum comment length in characters
    pub const MAX_LENGTH: usize = 2000;

    /// Create a new Comment from raw user input
    ///
    /// The text is trimmed first; it must then hold 1 to 2000 characters.
    pub fn new(
        id: Snowflake,
        profile_id: Snowflake,
        posting_id: Snowflake,
        text: &str,
    ) -> Result<Self, DomainError> {
        let text = Self::validate_text(text)?;

        Ok(Self {
            id,
            profile_id,
            posting_id,
            text,
            created_at: Utc::now(),
        })
    }

    /// Trim and validate comment text
    pub fn validate_text(text: &str) -> Result<String, DomainError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationError("text is required".to_string()));
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: Self::MAX_LENGTH,
            });
        }
        Ok(trimmed.to_string())
    }
}
