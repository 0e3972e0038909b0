//! Transient filter specification

use chrono::NaiveDate;

use super::IssueType;

/// Constraints narrowing an event collection. Built fresh from operator
/// input for each query and discarded afterwards; never persisted.
///
/// Absent dimensions are unconstrained. The UI's `"all"` sentinel is
/// collapsed to `None` at the query-parsing boundary, so the engine only
/// deals in absence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    /// Inclusive lower bound, taken from the start of the day
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound, extended to 23:59:59.999 of the day
    pub date_to: Option<NaiveDate>,
    /// Exact, case-sensitive zone match
    pub zone: Option<String>,
    /// Exact match on `driver_id` (never on the display name)
    pub driver: Option<String>,
    /// Match on the effective label; an empty list means unconstrained
    pub issue_types: Option<Vec<IssueType>>,
    /// Only events the AI called "none" that nobody has labeled yet
    pub show_only_untagged: bool,
}

impl EventFilter {
    /// True when no clause is active and `apply` is the identity
    pub fn is_unconstrained(&self) -> bool {
        self.date_from.is_none()
            && self.date_to.is_none()
            && self.zone.is_none()
            && self.driver.is_none()
            && self.issue_types.as_ref().map_or(true, |t| t.is_empty())
            && !self.show_only_untagged
    }
}
