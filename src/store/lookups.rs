//! Derived lookups for filter dropdowns

use std::collections::BTreeSet;

use crate::types::DriverRef;

use super::EventStore;

/// Distinct zones, lexicographically sorted
pub(super) fn distinct_zones(store: &EventStore) -> Vec<String> {
    let events = store.events.read();
    let zones: BTreeSet<String> = events.iter().map(|e| e.zone.clone()).collect();
    zones.into_iter().collect()
}

/// Distinct drivers deduped by id, sorted by display name (then id, since
/// two drivers may share a name). When an id appears with several names
/// the last-encountered name wins.
pub(super) fn distinct_drivers(store: &EventStore) -> Vec<DriverRef> {
    let events = store.events.read();

    let mut drivers: Vec<DriverRef> = Vec::new();
    for event in events.iter() {
        match drivers.iter_mut().find(|d| d.id == event.driver_id) {
            Some(driver) => driver.name = event.driver_name.clone(),
            None => drivers.push(DriverRef {
                id: event.driver_id.clone(),
                name: event.driver_name.clone(),
            }),
        }
    }

    drivers.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    drivers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EventStore;
    use crate::types::{Event, IssueType};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn event(id: &str, driver_id: &str, driver_name: &str) -> Event {
        Event::new(
            id.to_string(),
            Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            driver_id.to_string(),
            driver_name.to_string(),
            "R1".to_string(),
            "Zone A".to_string(),
            IssueType::MissedPickup,
            0.9,
            "https://example.com/v.mp4".to_string(),
        )
    }

    #[test]
    fn test_distinct_drivers_keeps_last_name_per_id() {
        let temp_dir = TempDir::new().unwrap();
        let store = EventStore::with_file_path(
            temp_dir
                .path()
                .join("events.jsonl")
                .to_string_lossy()
                .to_string(),
        );
        store
            .insert_events(vec![
                event("EVT-0001", "D001", "John Smith"),
                event("EVT-0002", "D001", "Jonathan Smith"),
                event("EVT-0003", "D002", "Maria Garcia"),
            ])
            .unwrap();

        let drivers = store.distinct_drivers();
        assert_eq!(drivers.len(), 2);
        let d001 = drivers.iter().find(|d| d.id == "D001").unwrap();
        assert_eq!(d001.name, "Jonathan Smith");
    }
}
