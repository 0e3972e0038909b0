//! Summary and digest endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use super::events::EventQueryParams;
use super::ApiResponse;
use crate::store::summarize::{render_digest, summarize};
use crate::store::EventStore;

/// GET /api/summary - Aggregate statistics for the filtered set
pub async fn get_summary(
    State(store): State<Arc<EventStore>>,
    Query(params): Query<EventQueryParams>,
) -> impl IntoResponse {
    let events = store.fetch_filtered(&params.into_filter());
    Json(ApiResponse::new(summarize(&events)))
}

/// GET /api/summary/digest - Shareable plain-text digest
pub async fn get_digest(
    State(store): State<Arc<EventStore>>,
    Query(params): Query<EventQueryParams>,
) -> impl IntoResponse {
    let events = store.fetch_filtered(&params.into_filter());
    let summary = summarize(&events);
    render_digest(&summary, &events, Utc::now())
}
