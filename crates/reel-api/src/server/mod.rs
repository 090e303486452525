//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reel_common::{AppConfig, AppError, JwtService};
use reel_core::SnowflakeGenerator;
use reel_db::{
    create_pool, run_migrations, PgCommentRepository, PgFollowRepository, PgLikeRepository,
    PgPostingRepository, PgProfileRepository, PgWatchEventRepository,
};
use reel_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the application with the base middleware stack
///
/// No rate limiting; used by tests and local tooling.
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    apply_middleware(router).with_state(state)
}

/// Build the application with rate limiting and configured CORS
///
/// Health routes skip the rate limiter so probes are never throttled.
pub fn create_app_with_config(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(api.merge(health).with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = reel_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        info!(dir = %config.database.migrations_dir, "Running migrations...");
        run_migrations(&pool, &config.database.migrations_dir)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let posting_repo = Arc::new(PgPostingRepository::new(pool.clone()));
    let profile_repo = Arc::new(PgProfileRepository::new(pool.clone()));
    let like_repo = Arc::new(PgLikeRepository::new(pool.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(pool.clone()));
    let follow_repo = Arc::new(PgFollowRepository::new(pool.clone()));
    let watch_event_repo = Arc::new(PgWatchEventRepository::new(pool.clone()));

    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .posting_repo(posting_repo)
        .profile_repo(profile_repo)
        .like_repo(like_repo)
        .comment_repo(comment_repo)
        .follow_repo(follow_repo)
        .watch_event_repo(watch_event_repo)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .feed_config(config.feed)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API_HOST/API_PORT: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app_with_config(state)?;

    run_server(app, addr).await
}
