//! Reel API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p reel-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`, if present).

use reel_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Tracing needs the environment before the rest of the config is read
    let _ = dotenvy::dotenv();
    let env = std::env::var("APP_ENV")
        .ok()
        .and_then(|s| s.parse::<Environment>().ok())
        .unwrap_or_default();
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Starting Reel API Server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        feed_default_limit = config.feed.default_limit,
        feed_max_limit = config.feed.max_limit,
        "Configuration loaded"
    );

    reel_api::run(config).await?;

    Ok(())
}
