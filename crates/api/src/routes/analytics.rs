use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Metric history routes, mounted at `/analytics`.
///
/// ```text
/// GET  /metrics   -> list_metric_samples (?metricName, department, from, to)
/// POST /metrics   -> record_metric_sample
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/metrics",
        get(analytics::list_metric_samples).post(analytics::record_metric_sample),
    )
}
