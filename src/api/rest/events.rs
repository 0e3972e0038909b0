//! Event list, detail, review and share endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{ApiError, ApiResponse};
use crate::store::{EventStore, StoreError};
use crate::store::summarize::{driver_share_text, external_share_text};
use crate::types::{EventFilter, IssueType};
use crate::utils::time::parse_date_lenient;

/// Filter query parameters, as the dashboard sends them. Parsing is
/// deliberately lenient: malformed dates and unknown issue-type tokens
/// degrade to "no constraint" instead of failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct EventQueryParams {
    #[serde(rename = "dateFrom")]
    pub date_from: Option<String>,
    #[serde(rename = "dateTo")]
    pub date_to: Option<String>,
    pub zone: Option<String>,
    pub driver: Option<String>,
    /// Comma-separated issue-type tokens
    #[serde(rename = "issueTypes")]
    pub issue_types: Option<String>,
    #[serde(rename = "showOnlyUntagged", default)]
    pub show_only_untagged: bool,
}

impl EventQueryParams {
    /// Collapse UI sentinels and parse the typed filter
    pub fn into_filter(self) -> EventFilter {
        let issue_types = self.issue_types.map(|raw| {
            raw.split(',')
                .filter_map(|token| IssueType::parse(token.trim()))
                .collect::<Vec<_>>()
        });

        EventFilter {
            date_from: self.date_from.as_deref().and_then(parse_date_lenient),
            date_to: self.date_to.as_deref().and_then(parse_date_lenient),
            zone: normalize_choice(self.zone),
            driver: normalize_choice(self.driver),
            issue_types,
            show_only_untagged: self.show_only_untagged,
        }
    }
}

/// The dropdowns bind `"all"` (or nothing) for an unconstrained dimension
fn normalize_choice(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != "all")
}

/// GET /api/events - List events matching the filter
pub async fn list_events(
    State(store): State<Arc<EventStore>>,
    Query(params): Query<EventQueryParams>,
) -> impl IntoResponse {
    let events = store.fetch_filtered(&params.into_filter());
    let total = events.len();
    Json(ApiResponse::with_total(events, total))
}

/// GET /api/events/:id - Get a single event
pub async fn get_event(
    State(store): State<Arc<EventStore>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match store.fetch_all().into_iter().find(|e| e.id == id) {
        Some(event) => (StatusCode::OK, Json(ApiResponse::new(event))).into_response(),
        None => {
            let error = ApiError::not_found(format!("Event '{}' not found", id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}

/// Review submission body
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    #[serde(rename = "humanLabel")]
    pub human_label: IssueType,
    #[serde(default)]
    pub notes: String,
}

/// PUT /api/events/:id/review - Save a human label and notes
pub async fn put_review(
    State(store): State<Arc<EventStore>>,
    Path(id): Path<String>,
    Json(body): Json<ReviewRequest>,
) -> impl IntoResponse {
    match store.update_review(&id, body.human_label, &body.notes) {
        Ok(event) => (StatusCode::OK, Json(ApiResponse::new(event))).into_response(),
        Err(StoreError::NotFound(id)) => {
            let error = ApiError::not_found(format!("Event '{}' not found", id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
        Err(err) => {
            eprintln!("[Store] Failed to persist review for {}: {}", id, err);
            let error = ApiError::internal("failed to persist review");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// Share text audience selector
#[derive(Debug, Default, Deserialize)]
pub struct ShareParams {
    #[serde(default)]
    pub audience: Option<String>,
}

/// GET /api/events/:id/share - Plain-text share blurb for one event
pub async fn get_share_text(
    State(store): State<Arc<EventStore>>,
    Path(id): Path<String>,
    Query(params): Query<ShareParams>,
) -> impl IntoResponse {
    match store.fetch_all().into_iter().find(|e| e.id == id) {
        Some(event) => {
            let text = match params.audience.as_deref() {
                Some("external") => external_share_text(&event),
                _ => driver_share_text(&event),
            };
            text.into_response()
        }
        None => {
            let error = ApiError::not_found(format!("Event '{}' not found", id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}
