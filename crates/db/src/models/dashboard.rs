//! Raw dashboard counter row.

use cdi_core::metrics::DashboardCounts;
use sqlx::FromRow;

/// Single-row result of the dashboard counters query.
#[derive(Debug, Clone, FromRow)]
pub struct DashboardCountsRow {
    pub total_notes: i64,
    pub pending_notes: i64,
    pub high_priority_notes: i64,
    pub total_revenue: f64,
    pub total_suggestions: i64,
    pub accepted_suggestions: i64,
}

impl From<DashboardCountsRow> for DashboardCounts {
    fn from(r: DashboardCountsRow) -> Self {
        Self {
            total_notes: r.total_notes,
            pending_notes: r.pending_notes,
            high_priority_notes: r.high_priority_notes,
            total_revenue: r.total_revenue,
            total_suggestions: r.total_suggestions,
            accepted_suggestions: r.accepted_suggestions,
        }
    }
}
