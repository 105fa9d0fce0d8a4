//! Auction Advisor — property auction bid recommendations
//!
//! Entry point. Loads configuration, initialises structured logging,
//! and serves the form page until Ctrl+C.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use auction_advisor::config;
use auction_advisor::web::{self, routes::WebState};

/// Env var that switches log output to JSON.
const LOG_JSON_ENV: &str = "ADVISOR_LOG_JSON";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let cfg = config::AppConfig::load_or_default("config.toml")?;

    init_logging();

    let addr = cfg.server.addr()?;
    info!(
        name = %cfg.app.name,
        %addr,
        "Auction Advisor starting up"
    );

    let state = Arc::new(WebState::new(cfg.app.name.clone())?);

    web::serve(state, addr, shutdown_signal()).await?;

    info!("Auction Advisor shut down cleanly.");
    Ok(())
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received.");
    }
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("auction_advisor=info"));

    if std::env::var(LOG_JSON_ENV).is_ok() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
