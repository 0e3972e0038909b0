//! Event store - core data engine
//!
//! In-memory event collection backed by a JSONL file, with the filter,
//! review and summary operations layered on top as submodules.

pub mod filter;
pub mod review;
pub mod summarize;

mod lookups;
mod seed;

use std::env;
use std::fs;
use std::path::Path;

use parking_lot::RwLock;
use thiserror::Error;

use crate::types::{DriverRef, Event, EventFilter, IssueType};

/// Errors surfaced by the store boundary
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("event '{0}' not found")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Event store with an in-memory cache for thread-safe operations.
///
/// Reads clone out of the lock; the only mutation point is
/// [`EventStore::update_review`], which holds the write lock for the whole
/// find-mutate-persist sequence so a review is atomic per event.
pub struct EventStore {
    pub(crate) data_file_path: String,
    pub(crate) events: RwLock<Vec<Event>>,
}

impl EventStore {
    /// Create a store using `EVENTS_FILE_PATH` or `./events.jsonl`
    pub fn new() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        let default_path = current_dir.join("events.jsonl");

        let data_file_path = match env::var("EVENTS_FILE_PATH") {
            Ok(path) => {
                if Path::new(&path).is_absolute() {
                    path
                } else {
                    current_dir.join(path).to_string_lossy().to_string()
                }
            }
            Err(_) => default_path.to_string_lossy().to_string(),
        };

        let events = Self::load_events_from_file(&data_file_path).unwrap_or_default();

        Self {
            data_file_path,
            events: RwLock::new(events),
        }
    }

    /// Create a store with a custom file path
    pub fn with_file_path(file_path: String) -> Self {
        let events = Self::load_events_from_file(&file_path).unwrap_or_default();

        Self {
            data_file_path: file_path,
            events: RwLock::new(events),
        }
    }

    /// Load events from file (static helper for initialization).
    /// Malformed lines are skipped rather than failing the whole load.
    fn load_events_from_file(file_path: &str) -> StoreResult<Vec<Event>> {
        if !Path::new(file_path).exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(file_path)?;
        let mut events = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Ok(event) = serde_json::from_str::<Event>(line) {
                if !event.id.is_empty() {
                    events.push(event);
                }
            }
        }

        Ok(events)
    }

    /// Persist events to file (internal helper, expects caller to hold lock)
    pub(crate) fn persist_to_file(&self, events: &[Event]) -> StoreResult<()> {
        if let Some(parent) = Path::new(&self.data_file_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = String::new();
        for event in events {
            content.push_str(&serde_json::to_string(event)?);
            content.push('\n');
        }

        fs::write(&self.data_file_path, content)?;
        Ok(())
    }

    /// Get the data file path
    pub fn file_path(&self) -> &str {
        &self.data_file_path
    }

    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Bulk-insert events (ingest boundary, not part of the review flow)
    pub fn insert_events(&self, new_events: Vec<Event>) -> StoreResult<usize> {
        let mut events = self.events.write();
        let inserted = new_events.len();
        events.extend(new_events);
        self.persist_to_file(&events)?;
        Ok(inserted)
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

// Re-export operations from submodules by implementing them here
impl EventStore {
    /// Every known event, in storage order (callers must not rely on it)
    pub fn fetch_all(&self) -> Vec<Event> {
        self.events.read().clone()
    }

    /// Events matching the filter; identical to `filter::apply` over
    /// `fetch_all`, kept that way so the two can never disagree
    pub fn fetch_filtered(&self, event_filter: &EventFilter) -> Vec<Event> {
        filter::fetch_filtered(self, event_filter)
    }

    /// Apply a review to one event and return the updated copy
    pub fn update_review(
        &self,
        event_id: &str,
        human_label: IssueType,
        notes: &str,
    ) -> StoreResult<Event> {
        review::update_review(self, event_id, human_label, notes)
    }

    /// Distinct zones, sorted, reflecting current store state
    pub fn distinct_zones(&self) -> Vec<String> {
        lookups::distinct_zones(self)
    }

    /// Distinct drivers keyed by id, sorted by display name
    pub fn distinct_drivers(&self) -> Vec<DriverRef> {
        lookups::distinct_drivers(self)
    }

    /// Fill an empty store with generated demo events
    pub fn seed_demo(&self, count: usize) -> StoreResult<usize> {
        let mut events = self.events.write();
        if !events.is_empty() {
            return Ok(0);
        }
        *events = seed::generate_demo_events(count);
        self.persist_to_file(&events)?;
        Ok(events.len())
    }
}
