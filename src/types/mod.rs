//! Data types for the event review service
//!
//! This module contains all the core data structures used throughout the
//! application.

mod event;
mod filter;
mod summary;

pub use event::{DriverRef, Event, IssueType};
pub use filter::EventFilter;
pub use summary::{LabelCount, ReviewSummary};
