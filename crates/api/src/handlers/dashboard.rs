//! Handler for the live review dashboard.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use cdi_core::metrics::DashboardMetrics;
use cdi_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /dashboard/metrics
///
/// Computed on every request from the current notes and suggestions.
pub async fn get_metrics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let counts = DashboardRepo::counts(&state.pool).await?;
    let metrics = DashboardMetrics::from(counts);

    Ok(Json(DataResponse { data: metrics }))
}
