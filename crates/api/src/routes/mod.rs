pub mod analytics;
pub mod dashboard;
pub mod health;
pub mod notes;
pub mod suggestions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /notes                                  list (?status, priority, department, search), create
/// /notes/{id}                             get (with suggestions), update, delete
/// /notes/{id}/suggestions                 list, create batch
///
/// /suggestions/{id}                       get
/// /suggestions/{id}/accept                accept (POST, optional {feedback})
/// /suggestions/{id}/reject                reject (POST, optional {feedback})
///
/// /dashboard/metrics                      live review metrics
///
/// /analytics/metrics                      list (?metricName, department, from, to), record
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/notes", notes::router())
        .nest("/suggestions", suggestions::router())
        .nest("/dashboard", dashboard::router())
        .nest("/analytics", analytics::router())
}
