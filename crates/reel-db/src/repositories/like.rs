//! PostgreSQL implementation of LikeRepository

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reel_core::entities::Like;
use reel_core::error::DomainError;
use reel_core::traits::{LikeRepository, RepoResult};
use reel_core::value_objects::Snowflake;

use crate::models::PostingCountModel;

use super::error::{into_count_map, map_db_error, map_insert_error, to_id_array};

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn create(&self, like: &Like) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO likes (profile_id, posting_id, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(like.profile_id.into_inner())
        .bind(like.posting_id.into_inner())
        .bind(like.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_insert_error(
                e,
                || DomainError::AlreadyLiked,
                |constraint| {
                    Some(if constraint.contains("profile_id") {
                        DomainError::ProfileNotFound(like.profile_id)
                    } else {
                        DomainError::PostingNotFound(like.posting_id)
                    })
                },
            )
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, profile_id: Snowflake, posting_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM likes WHERE profile_id = $1 AND posting_id = $2
            "#,
        )
        .bind(profile_id.into_inner())
        .bind(posting_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::LikeNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self), fields(ids = posting_ids.len()))]
    async fn count_by_postings(
        &self,
        posting_ids: &[Snowflake],
    ) -> RepoResult<HashMap<Snowflake, i64>> {
        if posting_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let results = sqlx::query_as::<_, PostingCountModel>(
            r#"
            SELECT posting_id, COUNT(*) AS count
            FROM likes
            WHERE posting_id = ANY($1)
            GROUP BY posting_id
            "#,
        )
        .bind(to_id_array(posting_ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(into_count_map(results))
    }

    #[instrument(skip(self), fields(ids = posting_ids.len()))]
    async fn liked_among(
        &self,
        viewer_id: Snowflake,
        posting_ids: &[Snowflake],
    ) -> RepoResult<HashSet<Snowflake>> {
        if posting_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let results = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT posting_id
            FROM likes
            WHERE profile_id = $1 AND posting_id = ANY($2)
            "#,
        )
        .bind(viewer_id.into_inner())
        .bind(to_id_array(posting_ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Snowflake::new).collect())
    }
}
