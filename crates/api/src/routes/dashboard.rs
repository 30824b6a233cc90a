use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes, mounted at `/dashboard`.
///
/// ```text
/// GET /metrics    -> get_metrics
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/metrics", get(dashboard::get_metrics))
}
