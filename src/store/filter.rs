//! Filter engine
//!
//! Pure clause-conjunction predicate over events. `matches` is the single
//! place filter semantics live; `apply` and the store's `fetch_filtered`
//! both go through it.

use crate::types::{Event, EventFilter, IssueType};
use crate::utils::time::{end_of_day, start_of_day};

use super::EventStore;

/// True iff the event passes every active clause (AND across clauses,
/// OR across the listed issue types).
pub fn matches(event: &Event, filter: &EventFilter) -> bool {
    if let Some(from) = filter.date_from {
        if event.timestamp < start_of_day(from) {
            return false;
        }
    }

    if let Some(to) = filter.date_to {
        if event.timestamp > end_of_day(to) {
            return false;
        }
    }

    if let Some(ref zone) = filter.zone {
        if &event.zone != zone {
            return false;
        }
    }

    if let Some(ref driver) = filter.driver {
        if &event.driver_id != driver {
            return false;
        }
    }

    // An empty list means "no constraint", not "nothing matches"
    if let Some(ref issue_types) = filter.issue_types {
        if !issue_types.is_empty() && !issue_types.contains(&event.effective_label()) {
            return false;
        }
    }

    // Independent of the issue-types clause: a human label excludes the
    // event here even when that label is listed above
    if filter.show_only_untagged
        && (event.issue_type != IssueType::None || event.human_label.is_some())
    {
        return false;
    }

    true
}

/// Order-preserving subsequence selection; with no active clause this is
/// the identity.
pub fn apply(events: &[Event], filter: &EventFilter) -> Vec<Event> {
    events
        .iter()
        .filter(|event| matches(event, filter))
        .cloned()
        .collect()
}

pub(super) fn fetch_filtered(store: &EventStore, filter: &EventFilter) -> Vec<Event> {
    let events = store.events.read();
    apply(&events, filter)
}
