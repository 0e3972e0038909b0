//! Review state manager
//!
//! A review writes `human_label` and `notes` together onto a fresh copy of
//! the event; nothing else about the record ever changes.

use crate::types::{Event, IssueType};

use super::{EventStore, StoreError, StoreResult};

/// Pure copy-with-review. Never fails on well-formed input; existence
/// checks belong to the store.
pub fn review(event: &Event, human_label: IssueType, notes: &str) -> Event {
    event.with_review(human_label, notes)
}

/// Apply a review inside the store (holds the write lock for the whole
/// find-mutate-persist sequence, so concurrent reviews of the same event
/// are last-write-wins and reviews of different events never interleave).
pub(super) fn update_review(
    store: &EventStore,
    event_id: &str,
    human_label: IssueType,
    notes: &str,
) -> StoreResult<Event> {
    let mut events = store.events.write();

    let updated = {
        let slot = events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| StoreError::NotFound(event_id.to_string()))?;
        *slot = review(slot, human_label, notes);
        slot.clone()
    };

    store.persist_to_file(&events)?;
    Ok(updated)
}
