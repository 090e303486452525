//! Profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: i64,
    pub account_id: i64,
    pub name: String,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}
