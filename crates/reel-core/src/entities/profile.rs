//! Profile entity - the public identity behind postings and engagement

use chrono::{DateTime, Utc};

use crate::entities::CreatorSummary;
use crate::value_objects::Snowflake;

/// Profile entity (one per account)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Snowflake,
    pub account_id: Snowflake,
    pub name: String,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new Profile
    pub fn new(id: Snowflake, account_id: Snowflake, name: String) -> Self {
        Self {
            id,
            account_id,
            name,
            photo: None,
            created_at: Utc::now(),
        }
    }

    /// Summary shown next to this profile's postings
    pub fn summary(&self) -> CreatorSummary {
        CreatorSummary {
            id: self.id,
            name: self.name.clone(),
            photo: self.photo.clone(),
        }
    }
}
