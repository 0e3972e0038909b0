//! Summary statistics over a filtered event set

use serde::Serialize;

use super::IssueType;

/// One breakdown row: how many events carry this effective label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelCount {
    pub label: IssueType,
    pub count: usize,
    /// Share of the total, 0.0 for an empty set
    pub percentage: f64,
}

/// Derived, ephemeral aggregate over an event collection. Computed on
/// demand, never cached or persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewSummary {
    pub total: usize,
    /// Descending by count; ties keep first-encountered order
    pub breakdown: Vec<LabelCount>,
    pub reviewed: usize,
    pub unreviewed: usize,
    /// Distinct zones, lexicographically sorted
    pub zones: Vec<String>,
    /// Distinct driver names, lexicographically sorted
    pub drivers: Vec<String>,
}
