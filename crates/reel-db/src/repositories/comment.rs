//! PostgreSQL implementation of CommentRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reel_core::entities::Comment;
use reel_core::error::DomainError;
use reel_core::traits::{CommentRepository, RepoResult};
use reel_core::value_objects::Snowflake;

use crate::models::PostingCountModel;

use super::error::{into_count_map, map_db_error, map_insert_error, to_id_array};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, profile_id, posting_id, text, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.id.into_inner())
        .bind(comment.profile_id.into_inner())
        .bind(comment.posting_id.into_inner())
        .bind(&comment.text)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_insert_error(
                e,
                || DomainError::InternalError(format!("duplicate comment id {}", comment.id)),
                |constraint| {
                    Some(if constraint.contains("profile_id") {
                        DomainError::ProfileNotFound(comment.profile_id)
                    } else {
                        DomainError::PostingNotFound(comment.posting_id)
                    })
                },
            )
        })?;

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
            FROM comments
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
}
