//! Handlers for clinical notes.
//!
//! Provides endpoints for listing (filtered), creating, reading, patching and
//! deleting notes. Reads carry the derived suggestion aggregates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use cdi_core::error::CoreError;
use cdi_core::note_filter::NoteFilter;
use cdi_db::models::note::{CreateNote, UpdateNote};
use cdi_db::repositories::NoteRepo;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /notes?status=&priority=&department=&search=
///
/// List notes matching every supplied filter, most recently modified first.
pub async fn list_notes(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<NoteFilter>,
) -> AppResult<impl IntoResponse> {
    filter.validate()?;

    let notes = NoteRepo::list(&state.pool, &filter).await?;

    tracing::debug!(count = notes.len(), unfiltered = filter.is_unfiltered(), "Listed notes");

    Ok(Json(DataResponse { data: notes }))
}

/// POST /notes
///
/// Create a note, optionally with an initial batch of suggestions.
pub async fn create_note(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateNote>,
) -> AppResult<impl IntoResponse> {
    let new_note = input.prepare()?;

    let note = NoteRepo::create(&state.pool, &new_note).await?;

    tracing::info!(
        note_id = %note.id,
        patient_id = %note.patient_id,
        department = %note.department,
        suggestions = note.suggestions_count,
        "Note created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// GET /notes/{id}
///
/// Get a note together with all of its suggestions.
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let note = NoteRepo::find_with_suggestions(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("Note", &id))?;

    Ok(Json(DataResponse { data: note }))
}

/// PUT /notes/{id}
///
/// Patch workflow fields of a note.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<UpdateNote>,
) -> AppResult<impl IntoResponse> {
    input.validate_patch()?;

    let note = NoteRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Note", &id))?;

    tracing::info!(
        note_id = %note.id,
        status = %note.status,
        priority = %note.priority,
        "Note updated"
    );

    Ok(Json(DataResponse { data: note }))
}

/// DELETE /notes/{id}
///
/// Delete a note and every suggestion it owns.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let removed = NoteRepo::delete(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("Note", &id))?;

    tracing::info!(note_id = %id, suggestions_removed = removed, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}
