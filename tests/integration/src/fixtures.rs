//! Test fixtures and data generators
//!
//! Seeds profiles and postings straight through the repositories, and mints
//! access tokens for seeded profiles. Each seeder owns one day in 1980, well
//! behind live data, so tests can page through their own postings with a
//! cursor placed at the end of that day.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::OnceLock;

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use reel_common::JwtService;
use reel_core::entities::{Posting, Profile};
use reel_core::traits::{PostingRepository, ProfileRepository};
use reel_core::{FeedCursor, FeedPosition, Snowflake, SnowflakeGenerator};
use reel_db::{run_migrations, PgPool, PgPostingRepository, PgProfileRepository};
use serde::{Deserialize, Serialize};

use crate::helpers::MIGRATIONS_DIR;

/// Counter for per-test days
static DAY: AtomicI64 = AtomicI64::new(0);

/// One generator per test process; worker 1023 is never used by a server
fn ids() -> &'static SnowflakeGenerator {
    static IDS: OnceLock<SnowflakeGenerator> = OnceLock::new();
    IDS.get_or_init(|| SnowflakeGenerator::new(1023))
}

/// Seeded profile with a ready-to-use access token
#[derive(Debug, Clone)]
pub struct SeededProfile {
    pub id: Snowflake,
    pub name: String,
    pub token: String,
}

/// Direct-to-database seeder
pub struct Seeder {
    pool: PgPool,
    jwt: JwtService,
    day: DateTime<Utc>,
    profiles: Vec<Snowflake>,
}

impl Seeder {
    /// Connect using `DATABASE_URL` and `JWT_SECRET`, applying migrations
    pub async fn connect() -> Result<Self> {
        let url = std::env::var("DATABASE_URL")?;
        let secret = std::env::var("JWT_SECRET")?;
        let pool = PgPool::connect(&url).await?;
        run_migrations(&pool, MIGRATIONS_DIR).await?;

        let offset = DAY.fetch_add(1, Ordering::SeqCst) + (Utc::now().timestamp() % 300);
        let day = Utc.with_ymd_and_hms(1980, 1, 1, 0, 0, 0).unwrap() + Duration::days(offset);

        Ok(Self {
            pool,
            jwt: JwtService::new(&secret, 900),
            day,
            profiles: Vec::new(),
        })
    }

    /// Seed a profile and issue it an access token
    pub async fn profile(&mut self, name: &str) -> Result<SeededProfile> {
        let profile = Profile::new(ids().generate(), ids().generate(), name.to_string());
        PgProfileRepository::new(self.pool.clone())
            .create(&profile)
            .await?;
        self.profiles.push(profile.id);

        Ok(SeededProfile {
            id: profile.id,
            name: profile.name,
            token: self.jwt.issue_access_token(profile.id)?,
        })
    }

    /// Seed a posting `seconds` into this seeder's day
    pub async fn posting_at(&self, creator: &SeededProfile, seconds: i64) -> Result<Snowflake> {
        let mut posting = Posting::new(ids().generate(), creator.id);
        posting.caption = Some(format!("seeded by {}", creator.name));
        posting.created_at = self.day + Duration::seconds(seconds);
        PgPostingRepository::new(self.pool.clone())
            .create(&posting)
            .await?;
        Ok(posting.id)
    }

    /// Cursor positioned after everything seeded later than this seeder's day
    pub fn day_cursor(&self) -> String {
        let end_of_day = FeedPosition::new(self.day + Duration::days(1), Snowflake::new(i64::MAX));
        FeedCursor::encode(&end_of_day).into_string()
    }

    /// Remove every seeded profile; postings and engagement cascade
    pub async fn cleanup(self) -> Result<()> {
        let ids: Vec<i64> = self.profiles.iter().map(|id| id.into_inner()).collect();
        sqlx::query("DELETE FROM profiles WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Feed page
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub items: Vec<FeedItem>,
    pub next_cursor: Option<String>,
}

impl FeedPage {
    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }
}

/// Feed item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: String,
    pub creator: Creator,
    pub like_count: i64,
    pub comment_count: i64,
    pub viewer_has_liked: Option<bool>,
    pub viewer_follows_creator: Option<bool>,
}

/// Creator summary
#[derive(Debug, Deserialize)]
pub struct Creator {
    pub id: String,
    pub name: String,
}

/// Like request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeBody {
    pub posting_id: String,
}

impl LikeBody {
    pub fn new(posting_id: Snowflake) -> Self {
        Self {
            posting_id: posting_id.to_string(),
        }
    }
}

/// Follow request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowBody {
    pub profile_id: String,
}

impl FollowBody {
    pub fn new(profile_id: Snowflake) -> Self {
        Self {
            profile_id: profile_id.to_string(),
        }
    }
}

/// Comment request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentBody {
    pub posting_id: String,
    pub text: String,
}

/// Watch request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchBody {
    pub posting_id: String,
    pub watch_time_ms: i64,
    pub completed: bool,
}

/// Create posting request body
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostingBody {
    pub caption: Option<String>,
    pub media_url: Option<String>,
    pub tags: Vec<String>,
}
