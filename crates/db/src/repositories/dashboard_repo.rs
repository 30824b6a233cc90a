//! Read-only aggregate queries behind the review dashboard.

use cdi_core::clinical_note::{NOTE_STATUS_PENDING, PRIORITY_HIGH};
use cdi_core::metrics::DashboardCounts;
use cdi_core::suggestion::STATUS_ACCEPTED;
use sqlx::PgPool;

use crate::models::dashboard::DashboardCountsRow;

/// Provides the live dashboard counters.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Read every dashboard counter.
    ///
    /// All counters come from one statement, so they describe a single
    /// snapshot of the note and suggestion tables.
    pub async fn counts(pool: &PgPool) -> Result<DashboardCounts, sqlx::Error> {
        let row = sqlx::query_as::<_, DashboardCountsRow>(
            "SELECT
                (SELECT COUNT(*) FROM notes) AS total_notes,
                (SELECT COUNT(*) FROM notes WHERE status = $1) AS pending_notes,
                (SELECT COUNT(*) FROM notes WHERE priority = $2) AS high_priority_notes,
                (SELECT COALESCE(SUM(revenue_impact), 0)::float8 FROM suggestions) AS total_revenue,
                (SELECT COUNT(*) FROM suggestions) AS total_suggestions,
                (SELECT COUNT(*) FROM suggestions WHERE status = $3) AS accepted_suggestions",
        )
        .bind(NOTE_STATUS_PENDING)
        .bind(PRIORITY_HIGH)
        .bind(STATUS_ACCEPTED)
        .fetch_one(pool)
        .await?;

        Ok(row.into())
    }
}
