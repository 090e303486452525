//! PostgreSQL implementation of WatchEventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reel_core::entities::WatchEvent;
use reel_core::error::DomainError;
use reel_core::traits::{RepoResult, WatchEventRepository};

use super::error::map_insert_error;

/// PostgreSQL implementation of WatchEventRepository
#[derive(Clone)]
pub struct PgWatchEventRepository {
    pool: PgPool,
}

impl PgWatchEventRepository {
    /// Create a new PgWatchEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WatchEventRepository for PgWatchEventRepository {
    #[instrument(skip(self, event), fields(posting_id = %event.posting_id))]
    async fn create(&self, event: &WatchEvent) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO watch_events (id, profile_id, posting_id, watch_time_ms, completed, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(event.id.into_inner())
        .bind(event.profile_id.into_inner())
        .bind(event.posting_id.into_inner())
        .bind(event.watch_time_ms)
        .bind(event.completed)
        .bind(event.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_insert_error(
                e,
                || DomainError::InternalError(format!("duplicate watch event id {}", event.id)),
                |constraint| {
                    Some(if constraint.contains("profile_id") {
                        DomainError::ProfileNotFound(event.profile_id)
                    } else {
                        DomainError::PostingNotFound(event.posting_id)
                    })
                },
            )
        })?;

        Ok(())
    }
}
