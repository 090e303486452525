//! Error handling utilities for repositories

use std::collections::HashMap;

use reel_core::error::DomainError;
use reel_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

use crate::models::PostingCountModel;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    map_insert_error(e, on_unique, |_| None)
}

/// Map constraint violations raised by an INSERT
///
/// `on_foreign_key` gets the violated constraint name (e.g. `likes_posting_id_fkey`);
/// returning `None` falls through to a database error.
pub fn map_insert_error<U, F>(e: SqlxError, on_unique: U, on_foreign_key: F) -> DomainError
where
    U: FnOnce() -> DomainError,
    F: FnOnce(&str) -> Option<DomainError>,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
        if db_err.is_foreign_key_violation() {
            if let Some(err) = on_foreign_key(db_err.constraint().unwrap_or_default()) {
                return err;
            }
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Convert snowflakes to the BIGINT[] parameter used with `= ANY($1)`
pub fn to_id_array(ids: &[Snowflake]) -> Vec<i64> {
    ids.iter().map(|id| id.into_inner()).collect()
}

/// Collect grouped count rows into a lookup map
pub fn into_count_map(rows: Vec<PostingCountModel>) -> HashMap<Snowflake, i64> {
    rows.into_iter()
        .map(|row| (Snowflake::new(row.posting_id), row.count))
        .collect()
}
