//! REST API module for HTTP endpoints
//!
//! - `GET /api/events` - Filtered event list
//! - `GET /api/events/:id` - Single event
//! - `PUT /api/events/:id/review` - Save a review
//! - `GET /api/events/:id/share` - Per-event share text
//! - `GET /api/zones`, `GET /api/drivers` - Filter dropdown lookups
//! - `GET /api/summary`, `GET /api/summary/digest` - Aggregates

pub mod events;
pub mod lookups;
pub mod summary;

use serde::Serialize;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}
