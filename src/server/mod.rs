//! HTTP service for the spam classifier.
//!
//! The router mirrors the original deployment's surface: `POST /predict`
//! (and `/api/predict`), `GET /health` (and `/api/health`),
//! `GET /api/info`, and a JSON 404 fallback, with permissive CORS.
//!
//! The classifier is loaded before the listen socket is bound, so no
//! request is ever dispatched before loading completes; the shared state
//! is read-only for the process lifetime.

pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

use crate::error::Result;
use crate::model::ClassifierCell;

/// Shared, read-only application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// The classifier slot; filled during startup.
    pub classifier: ClassifierCell,
}

impl AppState {
    /// Create state around an already-filled classifier cell.
    pub fn new(classifier: ClassifierCell) -> Self {
        AppState { classifier }
    }
}

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/predict", post(handlers::predict_handler))
        .route("/api/predict", post(handlers::predict_handler))
        .route("/health", get(handlers::health_handler))
        .route("/api/health", get(handlers::health_handler))
        .route("/api/info", get(handlers::info_handler))
        .fallback(handlers::not_found_handler)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until shutdown.
pub async fn run(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("SMS spam detection service listening on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("failed to install shutdown handler: {e}");
    }
}
