//! Like entity - a profile liking a posting (at most once)

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Like entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub profile_id: Snowflake,
    pub posting_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Like {
    /// Create a new Like
    pub fn new(profile_id: Snowflake, posting_id: Snowflake) -> Self {
        Self {
            profile_id,
            posting_id,
            created_at: Utc::now(),
        }
    }
}
