//! Summary aggregator
//!
//! Reduces a filtered event set into counts and breakdowns, and renders
//! the shareable text digests. Everything here is a pure function of its
//! inputs; `render_digest` takes the generation time as an argument so
//! tests can assert exact strings.

use chrono::{DateTime, Utc};

use crate::types::{Event, IssueType, LabelCount, ReviewSummary};
use crate::utils::time::format_locale;

/// Aggregate an event collection. Total over any input, including empty.
pub fn summarize(events: &[Event]) -> ReviewSummary {
    let total = events.len();

    // Count per effective label, preserving first-encounter order so the
    // stable sort below breaks ties the way the input arrived
    let mut counts: Vec<(IssueType, usize)> = Vec::new();
    for event in events {
        let label = event.effective_label();
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let breakdown = counts
        .into_iter()
        .map(|(label, count)| LabelCount {
            label,
            count,
            percentage: percentage(count, total),
        })
        .collect();

    let reviewed = events.iter().filter(|e| e.is_reviewed()).count();

    let mut zones: Vec<String> = events.iter().map(|e| e.zone.clone()).collect();
    zones.sort();
    zones.dedup();

    let mut drivers: Vec<String> = events.iter().map(|e| e.driver_name.clone()).collect();
    drivers.sort();
    drivers.dedup();

    ReviewSummary {
        total,
        breakdown,
        reviewed,
        unreviewed: total - reviewed,
        zones,
        drivers,
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Render the shareable summary digest. Deterministic for fixed inputs;
/// the template is relied on by downstream consumers who paste it into
/// chat and email, so any change here is a breaking change.
pub fn render_digest(
    summary: &ReviewSummary,
    events: &[Event],
    generated_at: DateTime<Utc>,
) -> String {
    let mut lines = vec![
        "=== Event Review Summary ===".to_string(),
        format!("Generated: {}", format_locale(&generated_at)),
        String::new(),
        format!("Total Events: {}", summary.total),
        format!("Reviewed: {}", summary.reviewed),
        format!("Pending Review: {}", summary.unreviewed),
        String::new(),
        "Issue Breakdown:".to_string(),
    ];

    for entry in &summary.breakdown {
        lines.push(format!("  \u{2022} {}: {}", entry.label.label(), entry.count));
    }

    lines.push(String::new());
    lines.push("Zones Covered:".to_string());
    for zone in &summary.zones {
        lines.push(format!("  \u{2022} {}", zone));
    }

    lines.push(String::new());
    lines.push("Drivers:".to_string());
    for driver in &summary.drivers {
        lines.push(format!("  \u{2022} {}", driver));
    }

    lines.push(String::new());
    lines.push("Event IDs:".to_string());
    for event in events {
        lines.push(format!(
            "  \u{2022} {} - {} - {}",
            event.id,
            event.effective_label().label(),
            format_locale(&event.timestamp)
        ));
    }

    lines.join("\n")
}

/// Driver-facing share blurb for a single event, used for coaching
pub fn driver_share_text(event: &Event) -> String {
    let mut lines = vec![
        format!("Event Review - {}", event.id),
        format!("Driver: {}", event.driver_name),
        format!("Date: {}", format_locale(&event.timestamp)),
        format!("Location: {}", event.address.as_deref().unwrap_or(&event.zone)),
        format!("Issue: {}", event.effective_label().label()),
    ];
    if let Some(ref notes) = event.notes {
        lines.push(format!("Notes: {}", notes));
    }
    lines.push(String::new());
    lines.push("Review this event for coaching purposes.".to_string());
    lines.join("\n")
}

/// External/city-facing share blurb: adds the route, omits the driver
pub fn external_share_text(event: &Event) -> String {
    let mut lines = vec![
        format!("Event Reference: {}", event.id),
        format!("Date: {}", format_locale(&event.timestamp)),
        format!("Location: {}", event.address.as_deref().unwrap_or(&event.zone)),
        format!("Route: {}", event.route_id),
        format!("Issue Type: {}", event.effective_label().label()),
    ];
    if let Some(ref notes) = event.notes {
        lines.push(format!("Details: {}", notes));
    }
    lines.join("\n")
}
