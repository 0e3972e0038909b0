//! Event Review Service
//!
//! Backend for an operations dashboard that reviews automatically detected
//! waste-collection service events captured from vehicle dashcam footage.
//! Operators filter the event list, inspect an event's AI label, override
//! it with a human judgment and notes, and export a statistical digest of
//! a filtered set.
//!
//! # Modules
//!
//! - `types`: Core data structures (Event, IssueType, EventFilter, ReviewSummary)
//! - `store`: Event store with the filter, review and summary operations
//! - `api`: REST endpoints (axum)
//! - `utils`: Utility functions (timestamps, date bounds)
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use event_review::api::http::create_router;
//! use event_review::store::EventStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(EventStore::new());
//!     let app = create_router(store);
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use store::{EventStore, StoreError, StoreResult};
pub use types::{DriverRef, Event, EventFilter, IssueType, LabelCount, ReviewSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
