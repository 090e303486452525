//! Posting entity - a short video or post in the feed

use chrono::{DateTime, SubsecRound, Utc};

use crate::value_objects::{FeedPosition, Snowflake};

/// Posting entity
///
/// `(created_at, id)` is the feed sort key. `created_at` never changes after
/// creation and ids are strictly increasing, so the order is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub id: Snowflake,
    pub creator_id: Snowflake,
    pub caption: Option<String>,
    pub media_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub duration_sec: Option<i32>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Posting {
    /// Maximum number of tags on one posting
    pub const MAX_TAGS: usize = 30;

    /// Create a new Posting stamped with the current time
    pub fn new(id: Snowflake, creator_id: Snowflake) -> Self {
        Self {
            id,
            creator_id,
            caption: None,
            media_url: None,
            thumbnail_url: None,
            duration_sec: None,
            tags: Vec::new(),
            // Stored as TIMESTAMPTZ, which keeps microseconds
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    /// Position of this posting in the feed order
    #[inline]
    pub fn position(&self) -> FeedPosition {
        FeedPosition::new(self.created_at, self.id)
    }
}

/// Public summary of a posting's creator, joined into feed rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorSummary {
    pub id: Snowflake,
    pub name: String,
    pub photo: Option<String>,
}

/// Posting joined with its creator, as read by the feed planner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingWithCreator {
    pub posting: Posting,
    pub creator: CreatorSummary,
}

impl PostingWithCreator {
    #[inline]
    pub fn position(&self) -> FeedPosition {
        self.posting.position()
    }
}
