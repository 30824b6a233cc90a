//! Repository for the `suggestions` table.

use cdi_core::suggestion::STATUS_PENDING;
use cdi_core::suggestion_review::{ReviewDecision, REVIEWABLE_STATUS};
use sqlx::{PgConnection, PgPool};

use crate::models::suggestion::{NewSuggestion, ReviewOutcome, Suggestion};
use crate::repositories::note_repo::NoteRepo;

/// Column list for suggestions queries.
const COLUMNS: &str = "id, note_id, suggestion_type, priority, category, description, \
    original_text, suggested_text, reasoning, revenue_impact, confidence, status, \
    line_number, feedback, created_at, updated_at";

/// Provides creation, lookup and review of suggestions.
pub struct SuggestionRepo;

impl SuggestionRepo {
    /// Create a batch of suggestions under a note.
    ///
    /// Runs in a transaction: lock the note, insert every suggestion, then
    /// refresh the note's last-modified timestamp. Returns `None` if the note
    /// does not exist; nothing is inserted in that case.
    pub async fn create_for_note(
        pool: &PgPool,
        note_id: &str,
        input: &[NewSuggestion],
    ) -> Result<Option<Vec<Suggestion>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !NoteRepo::lock(&mut tx, note_id).await? {
            return Ok(None);
        }

        let created = Self::insert_all(&mut tx, note_id, input).await?;
        NoteRepo::touch(&mut tx, note_id).await?;

        tx.commit().await?;
        Ok(Some(created))
    }

    /// Insert suggestions on an existing connection, in input order.
    ///
    /// New suggestions always start `pending`.
    pub(crate) async fn insert_all(
        conn: &mut PgConnection,
        note_id: &str,
        input: &[NewSuggestion],
    ) -> Result<Vec<Suggestion>, sqlx::Error> {
        let query = format!(
            "INSERT INTO suggestions
                (id, note_id, suggestion_type, priority, category, description,
                 original_text, suggested_text, reasoning, revenue_impact, confidence,
                 status, line_number)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );

        let mut created = Vec::with_capacity(input.len());
        for s in input {
            let row = sqlx::query_as::<_, Suggestion>(&query)
                .bind(&s.id)
                .bind(note_id)
                .bind(&s.suggestion_type)
                .bind(&s.priority)
                .bind(&s.category)
                .bind(&s.description)
                .bind(&s.original_text)
                .bind(&s.suggested_text)
                .bind(&s.reasoning)
                .bind(s.revenue_impact)
                .bind(s.confidence)
                .bind(STATUS_PENDING)
                .bind(s.line_number)
                .fetch_one(&mut *conn)
                .await?;
            created.push(row);
        }
        Ok(created)
    }

    /// List a note's suggestions in creation order.
    pub async fn list_for_note(
        pool: &PgPool,
        note_id: &str,
    ) -> Result<Vec<Suggestion>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::list_for_note_in(&mut conn, note_id).await
    }

    pub(crate) async fn list_for_note_in(
        conn: &mut PgConnection,
        note_id: &str,
    ) -> Result<Vec<Suggestion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM suggestions
             WHERE note_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Suggestion>(&query)
            .bind(note_id)
            .fetch_all(&mut *conn)
            .await
    }

    /// Find a suggestion by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Suggestion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM suggestions WHERE id = $1");
        sqlx::query_as::<_, Suggestion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Record a review decision on a pending suggestion.
    ///
    /// The status change is one conditional `UPDATE`, so concurrent decisions
    /// on the same suggestion serialize on its row and exactly one applies.
    /// Feedback replaces the stored value only when supplied.
    pub async fn apply_decision(
        pool: &PgPool,
        id: &str,
        decision: ReviewDecision,
        feedback: Option<&str>,
    ) -> Result<ReviewOutcome, sqlx::Error> {
        let query = format!(
            "UPDATE suggestions SET
                status = $2,
                feedback = COALESCE($3, feedback)
             WHERE id = $1 AND status = $4
             RETURNING {COLUMNS}"
        );
        let applied = sqlx::query_as::<_, Suggestion>(&query)
            .bind(id)
            .bind(decision.target_status())
            .bind(feedback)
            .bind(REVIEWABLE_STATUS)
            .fetch_optional(pool)
            .await?;

        if let Some(suggestion) = applied {
            return Ok(ReviewOutcome::Applied(suggestion));
        }

        Ok(match Self::find_by_id(pool, id).await? {
            Some(current) => ReviewOutcome::AlreadyDecided(current),
            None => ReviewOutcome::NotFound,
        })
    }
}
