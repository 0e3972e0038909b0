//! Detection event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Issue label assigned to a detection, by the AI or by a reviewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    MissedPickup,
    BlockedAccess,
    BinMissing,
    OverflowVisible,
    None,
}

impl IssueType {
    /// All labels, in the order the detector emits them
    pub const ALL: [IssueType; 5] = [
        IssueType::MissedPickup,
        IssueType::BlockedAccess,
        IssueType::BinMissing,
        IssueType::OverflowVisible,
        IssueType::None,
    ];

    /// Wire token (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::MissedPickup => "missed_pickup",
            IssueType::BlockedAccess => "blocked_access",
            IssueType::BinMissing => "bin_missing",
            IssueType::OverflowVisible => "overflow_visible",
            IssueType::None => "none",
        }
    }

    /// Human-readable label used in lists, digests and share texts
    pub fn label(&self) -> &'static str {
        match self {
            IssueType::MissedPickup => "Missed Pickup",
            IssueType::BlockedAccess => "Blocked Access",
            IssueType::BinMissing => "Bin Missing",
            IssueType::OverflowVisible => "Overflow Visible",
            IssueType::None => "No Issue",
        }
    }

    /// Parse a wire token, `None` for anything unrecognized
    pub fn parse(token: &str) -> Option<IssueType> {
        IssueType::ALL.iter().copied().find(|t| t.as_str() == token)
    }
}

/// A single dashcam detection with its mutable review overlay.
///
/// `issue_type` is written once at creation and never changes; reviews only
/// touch `human_label` and `notes`, together, via [`Event::with_review`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "driverId")]
    pub driver_id: String,
    #[serde(rename = "driverName")]
    pub driver_name: String,
    #[serde(rename = "routeId")]
    pub route_id: String,
    pub zone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// AI-assigned label, immutable after creation
    #[serde(rename = "issueType")]
    pub issue_type: IssueType,
    /// Reviewer override; absent means "not yet reviewed"
    #[serde(rename = "humanLabel", default, skip_serializing_if = "Option::is_none")]
    pub human_label: Option<IssueType>,
    /// Detector confidence in `issue_type`, in [0, 1]
    pub confidence: f64,
    /// Stored redundantly at creation from `issue_type != none`; never
    /// recomputed (safe because `issue_type` is immutable)
    #[serde(rename = "hasIssue")]
    pub has_issue: bool,
    #[serde(rename = "videoUrl")]
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Event {
    /// Create a new unreviewed event; `has_issue` is derived here, once
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        timestamp: DateTime<Utc>,
        driver_id: String,
        driver_name: String,
        route_id: String,
        zone: String,
        issue_type: IssueType,
        confidence: f64,
        video_url: String,
    ) -> Self {
        Self {
            id,
            timestamp,
            driver_id,
            driver_name,
            route_id,
            zone,
            address: None,
            issue_type,
            human_label: None,
            confidence,
            has_issue: issue_type != IssueType::None,
            video_url,
            notes: None,
        }
    }

    pub fn with_address(mut self, address: String) -> Self {
        self.address = Some(address);
        self
    }

    /// The label used everywhere an event is displayed, filtered or
    /// aggregated: the reviewer override if present, else the AI label.
    pub fn effective_label(&self) -> IssueType {
        self.human_label.unwrap_or(self.issue_type)
    }

    pub fn is_reviewed(&self) -> bool {
        self.human_label.is_some()
    }

    /// Copy of this event with the review overlay written. The label is
    /// always set, even when it equals `issue_type` (an explicit
    /// confirmation is distinct from no review). Notes are trimmed;
    /// whitespace-only input clears them.
    pub fn with_review(&self, human_label: IssueType, notes: &str) -> Self {
        let notes = notes.trim();
        Self {
            human_label: Some(human_label),
            notes: if notes.is_empty() {
                None
            } else {
                Some(notes.to_string())
            },
            ..self.clone()
        }
    }
}

/// Driver lookup entry for filter dropdowns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRef {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_event(issue_type: IssueType) -> Event {
        Event::new(
            "EVT-0001".to_string(),
            Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            "D001".to_string(),
            "John Smith".to_string(),
            "R1".to_string(),
            "Zone A".to_string(),
            issue_type,
            0.92,
            "https://example.com/v.mp4".to_string(),
        )
    }

    #[test]
    fn test_effective_label_without_review() {
        let event = sample_event(IssueType::MissedPickup);
        assert_eq!(event.effective_label(), IssueType::MissedPickup);
    }

    #[test]
    fn test_effective_label_prefers_human_label() {
        let event = sample_event(IssueType::MissedPickup).with_review(IssueType::BinMissing, "");
        assert_eq!(event.effective_label(), IssueType::BinMissing);
    }

    #[test]
    fn test_with_review_trims_notes() {
        let event =
            sample_event(IssueType::None).with_review(IssueType::BinMissing, "  bin behind gate  ");
        assert_eq!(event.notes.as_deref(), Some("bin behind gate"));
    }

    #[test]
    fn test_with_review_whitespace_notes_become_absent() {
        let event = sample_event(IssueType::None).with_review(IssueType::BinMissing, "  ");
        assert_eq!(event.human_label, Some(IssueType::BinMissing));
        assert_eq!(event.notes, None);
    }

    #[test]
    fn test_with_review_leaves_original_untouched() {
        let original = sample_event(IssueType::MissedPickup);
        let reviewed = original.with_review(IssueType::None, "false positive");
        assert_eq!(original.human_label, None);
        assert_eq!(original.notes, None);
        assert_eq!(reviewed.issue_type, IssueType::MissedPickup);
        assert_eq!(reviewed.has_issue, original.has_issue);
    }

    #[test]
    fn test_has_issue_derived_at_creation() {
        assert!(sample_event(IssueType::OverflowVisible).has_issue);
        assert!(!sample_event(IssueType::None).has_issue);
    }

    #[test]
    fn test_issue_type_wire_round_trip() {
        for issue_type in IssueType::ALL {
            assert_eq!(IssueType::parse(issue_type.as_str()), Some(issue_type));
        }
        assert_eq!(IssueType::parse("pothole"), None);
    }

    #[test]
    fn test_event_serde_uses_camel_case() {
        let event = sample_event(IssueType::BlockedAccess);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["issueType"], "blocked_access");
        assert_eq!(json["driverId"], "D001");
        assert_eq!(json["hasIssue"], true);
        assert!(json.get("humanLabel").is_none());
        assert!(json.get("notes").is_none());
    }
}
