//! PostgreSQL implementation of FollowRepository

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reel_core::entities::Follow;
use reel_core::error::DomainError;
use reel_core::traits::{FollowRepository, RepoResult};
use reel_core::value_objects::Snowflake;

use super::error::{map_db_error, map_insert_error, to_id_array};

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn create(&self, follow: &Follow) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO follows (follower_id, following_id, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(follow.follower_id.into_inner())
        .bind(follow.following_id.into_inner())
        .bind(follow.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_insert_error(
                e,
                || DomainError::AlreadyFollowing,
                |constraint| {
                    let id = if constraint.contains("follower_id") {
                        follow.follower_id
                    } else {
                        follow.following_id
                    };
                    Some(DomainError::ProfileNotFound(id))
                },
            )
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, follower_id: Snowflake, following_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM follows WHERE follower_id = $1 AND following_id = $2
            "#,
        )
        .bind(follower_id.into_inner())
        .bind(following_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::FollowNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self), fields(ids = profile_ids.len()))]
    async fn followed_among(
        &self,
        viewer_id: Snowflake,
        profile_ids: &[Snowflake],
    ) -> RepoResult<HashSet<Snowflake>> {
        if profile_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let results = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT following_id
            FROM follows
            WHERE follower_id = $1 AND following_id = ANY($2)
            "#,
        )
        .bind(viewer_id.into_inner())
        .bind(to_id_array(profile_ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Snowflake::new).collect())
    }
}
