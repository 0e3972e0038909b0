//! Filter dropdown lookups

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use super::ApiResponse;
use crate::store::EventStore;

/// GET /api/zones - Distinct zones, sorted
pub async fn get_zones(State(store): State<Arc<EventStore>>) -> impl IntoResponse {
    let zones = store.distinct_zones();
    let total = zones.len();
    Json(ApiResponse::with_total(zones, total))
}

/// GET /api/drivers - Distinct drivers, sorted by name
pub async fn get_drivers(State(store): State<Arc<EventStore>>) -> impl IntoResponse {
    let drivers = store.distinct_drivers();
    let total = drivers.len();
    Json(ApiResponse::with_total(drivers, total))
}
