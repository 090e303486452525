//! Posting database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for postings table
#[derive(Debug, Clone, FromRow)]
pub struct PostingModel {
    pub id: i64,
    pub creator_id: i64,
    pub caption: Option<String>,
    pub media_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub duration_sec: Option<i32>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Posting row joined with its creator's public columns
#[derive(Debug, Clone, FromRow)]
pub struct PostingWithCreatorModel {
    #[sqlx(flatten)]
    pub posting: PostingModel,
    pub creator_name: String,
    pub creator_photo: Option<String>,
}
