//! Demo data generator
//!
//! Produces a plausible week of detections for local development, mirroring
//! the shape of the production ingest feed.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::types::{Event, IssueType};

const DRIVERS: [(&str, &str); 4] = [
    ("D001", "John Smith"),
    ("D002", "Maria Garcia"),
    ("D003", "David Chen"),
    ("D004", "Sarah Johnson"),
];

const ZONES: [&str; 5] = ["Zone A", "Zone B", "Downtown", "Industrial District", "Suburbs"];

const ADDRESSES: [&str; 6] = [
    "123 Main St",
    "456 Oak Ave",
    "789 Elm Blvd",
    "321 Pine Rd",
    "654 Maple Dr",
    "987 Cedar Ln",
];

const DEMO_VIDEO_URL: &str = "https://storage.example.com/demo/event.mp4";

/// Generate `count` events spread over the last 7 days, newest first.
/// Roughly 30% arrive already reviewed.
pub(super) fn generate_demo_events(count: usize) -> Vec<Event> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    let mut events: Vec<Event> = (0..count)
        .map(|i| {
            let (driver_id, driver_name) = DRIVERS[rng.gen_range(0..DRIVERS.len())];
            let issue_type = IssueType::ALL[rng.gen_range(0..IssueType::ALL.len())];
            let timestamp = now
                - Duration::days(rng.gen_range(0..7))
                - Duration::hours(rng.gen_range(0..24));
            let confidence = (rng.gen_range(0.5..=1.0) * 100.0_f64).round() / 100.0;

            let mut event = Event::new(
                format!("EVT-{:04}", i + 1),
                timestamp,
                driver_id.to_string(),
                driver_name.to_string(),
                format!("R{}", rng.gen_range(1..=20)),
                ZONES[rng.gen_range(0..ZONES.len())].to_string(),
                issue_type,
                confidence,
                DEMO_VIDEO_URL.to_string(),
            )
            .with_address(ADDRESSES[rng.gen_range(0..ADDRESSES.len())].to_string());

            if rng.gen_bool(0.3) {
                let label = IssueType::ALL[rng.gen_range(0..IssueType::ALL.len())];
                event = event.with_review(label, "Reviewed by ops manager");
            }

            event
        })
        .collect();

    events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_events_are_well_formed() {
        let events = generate_demo_events(50);
        assert_eq!(events.len(), 50);

        for event in &events {
            assert!((0.0..=1.0).contains(&event.confidence));
            assert_eq!(event.has_issue, event.issue_type != IssueType::None);
            assert!(event.address.is_some());
            if event.is_reviewed() {
                assert!(event.notes.is_some());
            }
        }

        // Newest first
        for pair in events.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }

        // Ids are unique
        let mut ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }
}
