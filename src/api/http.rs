//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{events, lookups, summary};
use crate::store::EventStore;

/// Create the Axum router with all endpoints
pub fn create_router(store: Arc<EventStore>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/events", get(events::list_events))
        .route("/api/events/:id", get(events::get_event))
        .route("/api/events/:id/review", put(events::put_review))
        .route("/api/events/:id/share", get(events::get_share_text))
        .route("/api/zones", get(lookups::get_zones))
        .route("/api/drivers", get(lookups::get_drivers))
        .route("/api/summary", get(summary::get_summary))
        .route("/api/summary/digest", get(summary::get_digest))
        .layer(cors)
        .with_state(store)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
