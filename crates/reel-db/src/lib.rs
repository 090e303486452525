//! # reel-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `reel-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the feed seek query and the
//!   grouped per-page aggregates
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reel_db::pool::{create_pool, DatabaseConfig};
//! use reel_db::repositories::PgPostingRepository;
//! use reel_core::traits::PostingRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let postings = PgPostingRepository::new(pool);
//!
//!     let first_page = postings.find_page(None, 20).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgFollowRepository, PgLikeRepository, PgPostingRepository,
    PgProfileRepository, PgWatchEventRepository,
};
