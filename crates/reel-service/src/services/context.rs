//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use reel_common::auth::JwtService;
use reel_common::FeedConfig;
use reel_core::traits::{
    CommentRepository, FollowRepository, LikeRepository, PostingRepository, ProfileRepository,
    WatchEventRepository,
};
use reel_core::{Snowflake, SnowflakeGenerator};
use reel_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Shared read-only by every request. It provides access to:
/// - The database pool (readiness checks)
/// - Repositories behind their domain traits
/// - JWT service for authentication
/// - Snowflake generator for ID generation
/// - Feed page sizing
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    posting_repo: Arc<dyn PostingRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    like_repo: Arc<dyn LikeRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    watch_event_repo: Arc<dyn WatchEventRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,

    feed_config: FeedConfig,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the posting repository
    pub fn posting_repo(&self) -> &dyn PostingRepository {
        self.posting_repo.as_ref()
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the like repository
    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the watch event repository
    pub fn watch_event_repo(&self) -> &dyn WatchEventRepository {
        self.watch_event_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }

    /// Feed page sizing
    pub fn feed_config(&self) -> &FeedConfig {
        &self.feed_config
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("snowflake_generator", &self.snowflake_generator)
            .field("feed_config", &self.feed_config)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    posting_repo: Option<Arc<dyn PostingRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    watch_event_repo: Option<Arc<dyn WatchEventRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    feed_config: Option<FeedConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn posting_repo(mut self, repo: Arc<dyn PostingRepository>) -> Self {
        self.posting_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn watch_event_repo(mut self, repo: Arc<dyn WatchEventRepository>) -> Self {
        self.watch_event_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Override feed page sizing (defaults to 20 / 50)
    pub fn feed_config(mut self, config: FeedConfig) -> Self {
        self.feed_config = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: required(self.pool, "pool")?,
            posting_repo: required(self.posting_repo, "posting_repo")?,
            profile_repo: required(self.profile_repo, "profile_repo")?,
            like_repo: required(self.like_repo, "like_repo")?,
            comment_repo: required(self.comment_repo, "comment_repo")?,
            follow_repo: required(self.follow_repo, "follow_repo")?,
            watch_event_repo: required(self.watch_event_repo, "watch_event_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            snowflake_generator: self.snowflake_generator.unwrap_or_default(),
            feed_config: self.feed_config.unwrap_or_default(),
        })
    }
}
