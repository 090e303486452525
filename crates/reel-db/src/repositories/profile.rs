//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reel_core::entities::Profile;
use reel_core::error::DomainError;
use reel_core::traits::{ProfileRepository, RepoResult};
use reel_core::value_objects::Snowflake;

use crate::models::ProfileModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r#"
            SELECT id, account_id, name, photo, created_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn create(&self, profile: &Profile) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles (id, account_id, name, photo, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(profile.id.into_inner())
        .bind(profile.account_id.into_inner())
        .bind(&profile.name)
        .bind(&profile.photo)
        .bind(profile.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ValidationError("account already has a profile".to_string())
            })
        })?;

        Ok(())
    }
}
