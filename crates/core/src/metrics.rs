//! Dashboard metric arithmetic.
//!
//! Counters are read from the store in one snapshot ([`DashboardCounts`]);
//! this module derives the published [`DashboardMetrics`] from them. Nothing
//! is cached between calls.

use serde::Serialize;

/// Raw counters over the current note and suggestion set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardCounts {
    pub total_notes: i64,
    pub pending_notes: i64,
    pub high_priority_notes: i64,
    /// Sum of every note's potential revenue.
    pub total_revenue: f64,
    pub total_suggestions: i64,
    pub accepted_suggestions: i64,
}

/// Aggregate statistics for the review dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_notes: i64,
    pub pending_notes: i64,
    pub high_priority_notes: i64,
    pub total_revenue: f64,
    pub total_suggestions: i64,
    pub accepted_suggestions: i64,
    /// Percentage of suggestions accepted, one decimal place.
    pub acceptance_rate: f64,
}

impl From<DashboardCounts> for DashboardMetrics {
    fn from(c: DashboardCounts) -> Self {
        Self {
            total_notes: c.total_notes,
            pending_notes: c.pending_notes,
            high_priority_notes: c.high_priority_notes,
            total_revenue: c.total_revenue,
            total_suggestions: c.total_suggestions,
            accepted_suggestions: c.accepted_suggestions,
            acceptance_rate: acceptance_rate(c.accepted_suggestions, c.total_suggestions),
        }
    }
}

/// `accepted / total * 100`, rounded to one decimal; `0` when there are no
/// suggestions.
pub fn acceptance_rate(accepted: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    round_to_tenth(accepted as f64 / total as f64 * 100.0)
}

/// Round half away from zero to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
