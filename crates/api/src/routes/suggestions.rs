//! Route definitions for suggestion lookup and review.
//!
//! Mounted at `/suggestions` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::suggestions;
use crate::state::AppState;

/// ```text
/// GET    /{id}            -> get_suggestion
/// POST   /{id}/accept     -> accept_suggestion
/// POST   /{id}/reject     -> reject_suggestion
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(suggestions::get_suggestion))
        .route("/{id}/accept", post(suggestions::accept_suggestion))
        .route("/{id}/reject", post(suggestions::reject_suggestion))
}
