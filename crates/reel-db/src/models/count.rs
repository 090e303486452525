//! Aggregated per-posting count (from GROUP BY queries)

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct PostingCountModel {
    pub posting_id: i64,
    pub count: i64,
}
