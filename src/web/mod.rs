//! Web front end — Axum server for the auction form and JSON API.
//!
//! Serves the HTML form at `/` and a small JSON API under `/api`.
//! Every request is independent; nothing is kept between requests.

pub mod routes;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::info;

use routes::AppState;

/// The form page template (compiled into the binary).
const INDEX_HTML: &str = include_str!("templates/index.html");

/// Bind `addr` and serve until `shutdown` resolves.
pub async fn serve<F>(state: AppState, addr: SocketAddr, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Web server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Web server error")?;

    Ok(())
}

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_static("*"))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // API routes
        .route("/api/evaluate", post(routes::post_evaluate))
        .route("/api/growth", post(routes::post_growth))
        .route("/api/investment-types", get(routes::get_investment_types))
        .route("/health", get(routes::health))
        // Form page
        .route("/", get(routes::get_index).post(routes::post_index))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
