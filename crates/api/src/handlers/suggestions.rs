//! Handlers for suggestions: batch creation under a note, lookup, and the
//! accept / reject review decisions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use cdi_core::error::CoreError;
use cdi_core::suggestion_review::{validate_decision, ReviewDecision};
use cdi_db::models::suggestion::{CreateSuggestion, ReviewOutcome, ReviewSuggestion, Suggestion};
use cdi_db::repositories::SuggestionRepo;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /notes/{id}/suggestions
///
/// List a note's suggestions in creation order. An unknown or deleted note
/// has no suggestions, so the list is empty rather than a 404.
pub async fn list_note_suggestions(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let suggestions = SuggestionRepo::list_for_note(&state.pool, &note_id).await?;

    Ok(Json(DataResponse { data: suggestions }))
}

/// POST /notes/{id}/suggestions
///
/// Create a batch of pending suggestions under an existing note.
pub async fn create_note_suggestions(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    ApiJson(input): ApiJson<Vec<CreateSuggestion>>,
) -> AppResult<impl IntoResponse> {
    if input.is_empty() {
        return Err(CoreError::invalid_field("suggestions", "must contain at least one item").into());
    }

    let batch = input
        .iter()
        .enumerate()
        .map(|(i, s)| {
            s.prepare().map_err(|e| match e {
                CoreError::Validation(msg) => CoreError::Validation(format!("[{i}] {msg}")),
                other => other,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let created = SuggestionRepo::create_for_note(&state.pool, &note_id, &batch)
        .await?
        .ok_or_else(|| CoreError::not_found("Note", &note_id))?;

    tracing::info!(note_id = %note_id, count = created.len(), "Suggestions created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /suggestions/{id}
pub async fn get_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let suggestion = SuggestionRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("Suggestion", &id))?;

    Ok(Json(DataResponse { data: suggestion }))
}

/// POST /suggestions/{id}/accept
///
/// Body is optional: `{ "feedback": "..." }`.
pub async fn accept_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<ApiJson<ReviewSuggestion>>,
) -> AppResult<impl IntoResponse> {
    let suggestion = review(&state, &id, ReviewDecision::Accept, body).await?;
    Ok(Json(DataResponse { data: suggestion }))
}

/// POST /suggestions/{id}/reject
///
/// Body is optional: `{ "feedback": "..." }`.
pub async fn reject_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<ApiJson<ReviewSuggestion>>,
) -> AppResult<impl IntoResponse> {
    let suggestion = review(&state, &id, ReviewDecision::Reject, body).await?;
    Ok(Json(DataResponse { data: suggestion }))
}

/// Apply a review decision to a pending suggestion.
///
/// Decided suggestions are never overwritten; the caller gets a conflict
/// naming the status already recorded.
async fn review(
    state: &AppState,
    id: &str,
    decision: ReviewDecision,
    body: Option<ApiJson<ReviewSuggestion>>,
) -> AppResult<Suggestion> {
    let input = body.map(|ApiJson(b)| b).unwrap_or_default();
    input.validate_feedback()?;

    match SuggestionRepo::apply_decision(&state.pool, id, decision, input.feedback.as_deref())
        .await?
    {
        ReviewOutcome::Applied(suggestion) => {
            tracing::info!(
                suggestion_id = %suggestion.id,
                note_id = %suggestion.note_id,
                status = %suggestion.status,
                has_feedback = suggestion.feedback.is_some(),
                "Suggestion reviewed"
            );
            Ok(suggestion)
        }
        ReviewOutcome::AlreadyDecided(current) => {
            validate_decision(id, &current.status, decision)?;
            // The id was created between the update and the re-read.
            Err(CoreError::Conflict(format!(
                "Cannot {} suggestion {id}: it changed concurrently",
                decision.verb()
            ))
            .into())
        }
        ReviewOutcome::NotFound => Err(CoreError::not_found("Suggestion", id).into()),
    }
}
