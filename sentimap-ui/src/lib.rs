//! sentimap-ui library - Sentimap web service
//!
//! Wires the analysis pipeline, geolocation client, and database into an
//! axum router. Both capabilities are constructor-injected so tests can
//! swap in stub backends.

use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;

pub mod analysis;
pub mod api;
pub mod db;
pub mod geo;

use analysis::SentimentAnalyzer;
use geo::GeoLocator;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Sentiment pipeline (stateless, shared read-only)
    pub analyzer: Arc<SentimentAnalyzer>,
    /// Geolocation capability
    pub geo: Arc<dyn GeoLocator>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, analyzer: Arc<SentimentAnalyzer>, geo: Arc<dyn GeoLocator>) -> Self {
        Self { db, analyzer, geo }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{delete, get, post};

    // JSON API
    let api = Router::new()
        .route("/api/register", post(api::register))
        .route("/api/sentiment", post(api::submit_sentiment))
        .route("/api/history", get(api::history))
        .route("/api/query/:id", delete(api::delete_query))
        .route("/api/sentiment-map", get(api::sentiment_map));

    // Embedded UI pages and health check
    let pages = Router::new()
        .route("/", get(api::serve_welcome))
        .route("/register", get(api::serve_register))
        .route("/sentiment", get(api::serve_sentiment))
        .route("/history", get(api::serve_history))
        .route("/map", get(api::serve_map))
        .route("/about", get(api::serve_about))
        .route("/static/app.js", get(api::serve_app_js))
        .merge(api::health_routes());

    Router::new()
        .merge(api)
        .merge(pages)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}
