//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub feed: FeedConfig,
    pub snowflake: SnowflakeConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations at startup
    #[serde(default)]
    pub run_migrations: bool,
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Feed page sizing
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FeedConfig {
    /// Page size when the client sends no usable `limit`
    #[serde(default = "default_feed_limit")]
    pub default_limit: i64,
    /// Hard upper bound on page size
    #[serde(default = "default_feed_max_limit")]
    pub max_limit: i64,
}

impl FeedConfig {
    /// Largest page size any configuration may allow
    pub const HARD_MAX_LIMIT: i64 = 50;
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_limit: default_feed_limit(),
            max_limit: default_feed_max_limit(),
        }
    }
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeConfig {
    #[serde(default)]
    pub worker_id: u16,
}

// Default value functions
fn default_app_name() -> String {
    "reel-feed".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_migrations_dir() -> String {
    "./migrations".to_string()
}

fn default_access_token_expiry() -> i64 {
    900 // 15 minutes
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_feed_limit() -> i64 {
    20
}

fn default_feed_max_limit() -> i64 {
    FeedConfig::HARD_MAX_LIMIT
}

/// Read an optional variable, falling back when unset or unparsable
fn var_or<T: FromStr>(name: &str, default: impl FnOnce() -> T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(default)
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or a
    /// value is outside its allowed range
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let env = match env::var("APP_ENV") {
            Ok(s) => s.parse()?,
            Err(_) => Environment::default(),
        };

        let config = Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env,
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: required_var("API_PORT")?
                    .parse()
                    .map_err(|_| ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: required_var("DATABASE_URL")?,
                max_connections: var_or("DATABASE_MAX_CONNECTIONS", default_max_connections),
                min_connections: var_or("DATABASE_MIN_CONNECTIONS", default_min_connections),
                run_migrations: var_or("DATABASE_RUN_MIGRATIONS", || false),
                migrations_dir: env::var("DATABASE_MIGRATIONS_DIR")
                    .unwrap_or_else(|_| default_migrations_dir()),
            },
            jwt: JwtConfig {
                secret: required_var("JWT_SECRET")?,
                access_token_expiry: var_or("JWT_ACCESS_TOKEN_EXPIRY", default_access_token_expiry),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: var_or(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second,
                ),
                burst: var_or("RATE_LIMIT_BURST", default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            feed: FeedConfig {
                default_limit: var_or("FEED_DEFAULT_LIMIT", default_feed_limit),
                max_limit: var_or("FEED_MAX_LIMIT", default_feed_max_limit),
            },
            snowflake: SnowflakeConfig {
                worker_id: var_or("WORKER_ID", || 0),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for the first offending variable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=FeedConfig::HARD_MAX_LIMIT).contains(&self.feed.max_limit) {
            return Err(ConfigError::InvalidValue(
                "FEED_MAX_LIMIT",
                self.feed.max_limit.to_string(),
            ));
        }
        if !(1..=self.feed.max_limit).contains(&self.feed.default_limit) {
            return Err(ConfigError::InvalidValue(
                "FEED_DEFAULT_LIMIT",
                self.feed.default_limit.to_string(),
            ));
        }
        if self.snowflake.worker_id > 1023 {
            return Err(ConfigError::InvalidValue(
                "WORKER_ID",
                self.snowflake.worker_id.to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
