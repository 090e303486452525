//! PostgreSQL implementation of PostingRepository
//!
//! `find_page` is the feed's seek query: one statement that filters by the
//! keyset position, orders by `(created_at DESC, id DESC)`, and joins the
//! creator. It is served by `idx_postings_feed_order`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reel_core::entities::{Posting, PostingWithCreator};
use reel_core::error::DomainError;
use reel_core::traits::{PostingRepository, RepoResult};
use reel_core::value_objects::{FeedPosition, Snowflake};

use crate::models::PostingWithCreatorModel;

use super::error::{map_db_error, map_insert_error};

/// PostgreSQL implementation of PostingRepository
#[derive(Clone)]
pub struct PgPostingRepository {
    pool: PgPool,
}

impl PgPostingRepository {
    /// Create a new PgPostingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostingRepository for PgPostingRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<PostingWithCreator>> {
        let result = sqlx::query_as::<_, PostingWithCreatorModel>(
            r#"
            SELECT p.id, p.creator_id, p.caption, p.media_url, p.thumbnail_url,
                   p.duration_sec, p.tags, p.created_at,
                   pr.name AS creator_name, pr.photo AS creator_photo
            FROM postings p
            JOIN profiles pr ON pr.id = p.creator_id
            WHERE p.id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(PostingWithCreator::from))
    }

    #[instrument(skip(self))]
    async fn find_page(
        &self,
        seek: Option<FeedPosition>,
        limit: i64,
    ) -> RepoResult<Vec<PostingWithCreator>> {
        let results = match seek {
            Some(position) => {
                // Row comparison is the same predicate as
                // created_at < t OR (created_at = t AND id < id)
                sqlx::query_as::<_, PostingWithCreatorModel>(
                    r#"
                    SELECT p.id, p.creator_id, p.caption, p.media_url, p.thumbnail_url,
                           p.duration_sec, p.tags, p.created_at,
                           pr.name AS creator_name, pr.photo AS creator_photo
                    FROM postings p
                    JOIN profiles pr ON pr.id = p.creator_id
                    WHERE (p.created_at, p.id) < ($1, $2)
                    ORDER BY p.created_at DESC, p.id DESC
                    LIMIT $3
                    "#,
                )
                .bind(position.created_at())
                .bind(position.id().into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, PostingWithCreatorModel>(
                    r#"
                    SELECT p.id, p.creator_id, p.caption, p.media_url, p.thumbnail_url,
                           p.duration_sec, p.tags, p.created_at,
                           pr.name AS creator_name, pr.photo AS creator_photo
                    FROM postings p
                    JOIN profiles pr ON pr.id = p.creator_id
                    ORDER BY p.created_at DESC, p.id DESC
                    LIMIT $1
                    "#,
                )
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PostingWithCreator::from).collect())
    }

    #[instrument(skip(self, posting), fields(posting_id = %posting.id))]
    async fn create(&self, posting: &Posting) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO postings (id, creator_id, caption, media_url, thumbnail_url,
                                  duration_sec, tags, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(posting.id.into_inner())
        .bind(posting.creator_id.into_inner())
        .bind(&posting.caption)
        .bind(&posting.media_url)
        .bind(&posting.thumbnail_url)
        .bind(posting.duration_sec)
        .bind(&posting.tags)
        .bind(posting.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_insert_error(
                e,
                || DomainError::InternalError(format!("duplicate posting id {}", posting.id)),
                |_| Some(DomainError::ProfileNotFound(posting.creator_id)),
            )
        })?;

        Ok(())
    }
}
