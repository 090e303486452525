//! Watch event entity - how long a profile watched a posting

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Watch event entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEvent {
    pub id: Snowflake,
    pub profile_id: Snowflake,
    pub posting_id: Snowflake,
    pub watch_time_ms: i32,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl WatchEvent {
    /// Create a new WatchEvent
    ///
    /// # Errors
    /// Returns a validation error for negative watch time
    pub fn new(
        id: Snowflake,
        profile_id: Snowflake,
        posting_id: Snowflake,
        watch_time_ms: i32,
        completed: bool,
    ) -> Result<Self, DomainError> {
        if watch_time_ms < 0 {
            return Err(DomainError::ValidationError(
                "watchTimeMs must be a non-negative number".to_string(),
            ));
        }

        Ok(Self {
            id,
            profile_id,
            posting_id,
            watch_time_ms,
            completed,
            created_at: Utc::now(),
        })
    }
}
