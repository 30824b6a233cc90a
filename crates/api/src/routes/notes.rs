//! Route definitions for clinical notes.
//!
//! Mounted at `/notes` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{notes, suggestions};
use crate::state::AppState;

/// Note routes.
///
/// ```text
/// GET    /                    -> list_notes (?status, priority, department, search)
/// POST   /                    -> create_note
/// GET    /{id}                -> get_note
/// PUT    /{id}                -> update_note
/// DELETE /{id}                -> delete_note
/// GET    /{id}/suggestions    -> list_note_suggestions
/// POST   /{id}/suggestions    -> create_note_suggestions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_notes).post(notes::create_note))
        .route(
            "/{id}",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .route(
            "/{id}/suggestions",
            get(suggestions::list_note_suggestions).post(suggestions::create_note_suggestions),
        )
}
