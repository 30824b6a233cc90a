//! Repository for the `notes` table.
//!
//! Note reads always join a per-note suggestion aggregate, so
//! `suggestions_count` and `potential_revenue` reflect the suggestions that
//! exist at read time.

use cdi_core::note_filter::{contains_pattern, NoteFilter};
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use crate::models::note::{NewNote, Note, NoteWithSuggestions, UpdateNote};
use crate::repositories::suggestion_repo::SuggestionRepo;

/// Column list for note queries over [`NOTE_SOURCE`].
const COLUMNS: &str = "n.id, n.patient_id, n.patient_name, n.note_type, n.department, \
    n.admission_date, n.discharge_date, n.priority, n.status, n.content, \
    agg.suggestions_count, agg.potential_revenue, n.assigned_to, n.created_at, n.updated_at";

/// `notes` joined with its suggestion aggregate. The aggregate always yields
/// one row, so notes without suggestions report `0` / `0.0`.
const NOTE_SOURCE: &str = "notes n \
    CROSS JOIN LATERAL ( \
        SELECT COUNT(*) AS suggestions_count, \
               COALESCE(SUM(s.revenue_impact), 0)::float8 AS potential_revenue \
        FROM suggestions s WHERE s.note_id = n.id \
    ) agg";

/// Most recently modified first; ties broken by creation time, then id.
const ORDER_BY: &str = "n.updated_at DESC, n.created_at DESC, n.id";

/// Provides CRUD and filtered listing for clinical notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List notes matching every active predicate of `filter`.
    ///
    /// The filter is expected to be validated by the caller.
    pub async fn list(pool: &PgPool, filter: &NoteFilter) -> Result<Vec<Note>, sqlx::Error> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM {NOTE_SOURCE} WHERE TRUE"));

        if let Some(status) = filter.status() {
            qb.push(" AND n.status = ").push_bind(status);
        }
        if let Some(priority) = filter.priority() {
            qb.push(" AND n.priority = ").push_bind(priority);
        }
        if let Some(department) = filter.department() {
            qb.push(" AND n.department = ").push_bind(department);
        }
        if let Some(search) = filter.search() {
            let pattern = contains_pattern(search);
            qb.push(" AND (n.patient_name ILIKE ")
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\' OR n.patient_id ILIKE ")
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\' OR n.note_type ILIKE ")
                .push_bind(pattern)
                .push(" ESCAPE '\\')");
        }

        qb.push(" ORDER BY ").push(ORDER_BY);

        qb.build_query_as::<Note>().fetch_all(pool).await
    }

    /// Find a note by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {NOTE_SOURCE} WHERE n.id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a note together with its suggestions.
    ///
    /// Both reads share one REPEATABLE READ snapshot, so the derived fields
    /// always agree with the returned suggestion list.
    pub async fn find_with_suggestions(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<NoteWithSuggestions>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let Some(note) = Self::find_in(&mut tx, id).await? else {
            return Ok(None);
        };
        let suggestions = SuggestionRepo::list_for_note_in(&mut tx, id).await?;

        tx.commit().await?;
        Ok(Some(NoteWithSuggestions { note, suggestions }))
    }

    /// Insert a note and any inline suggestions in one transaction.
    pub async fn create(pool: &PgPool, input: &NewNote) -> Result<Note, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "INSERT INTO notes
                (id, patient_id, patient_name, note_type, department, admission_date,
                 discharge_date, priority, status, content, assigned_to)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(&input.id)
        .bind(&input.patient_id)
        .bind(&input.patient_name)
        .bind(&input.note_type)
        .bind(&input.department)
        .bind(input.admission_date)
        .bind(input.discharge_date)
        .bind(&input.priority)
        .bind(&input.status)
        .bind(&input.content)
        .bind(&input.assigned_to)
        .execute(&mut *tx)
        .await?;

        SuggestionRepo::insert_all(&mut tx, &input.id, &input.suggestions).await?;

        let note = Self::find_in(&mut tx, &input.id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        tx.commit().await?;
        Ok(note)
    }

    /// Apply a partial update. Returns `None` if the note does not exist.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "WITH n AS (
                UPDATE notes SET
                    status = COALESCE($2, status),
                    priority = COALESCE($3, priority),
                    assigned_to = COALESCE($4, assigned_to),
                    department = COALESCE($5, department),
                    note_type = COALESCE($6, note_type),
                    content = COALESCE($7, content)
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM n
             CROSS JOIN LATERAL (
                SELECT COUNT(*) AS suggestions_count,
                       COALESCE(SUM(s.revenue_impact), 0)::float8 AS potential_revenue
                FROM suggestions s WHERE s.note_id = n.id
             ) agg"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(&input.assigned_to)
            .bind(&input.department)
            .bind(&input.note_type)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note and every suggestion it owns in one transaction.
    ///
    /// Returns the number of suggestions removed, or `None` if the note does
    /// not exist.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !Self::lock(&mut tx, id).await? {
            return Ok(None);
        }

        let removed = sqlx::query("DELETE FROM suggestions WHERE note_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(removed))
    }

    /// Lock a note row for the rest of the transaction.
    ///
    /// Returns `false` if the note does not exist.
    pub(crate) async fn lock(conn: &mut PgConnection, id: &str) -> Result<bool, sqlx::Error> {
        let row: Option<(String,)> = sqlx::query_as("SELECT id FROM notes WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.is_some())
    }

    /// Refresh a note's last-modified timestamp. The trigger sets the value.
    pub(crate) async fn touch(conn: &mut PgConnection, id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE notes SET updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    async fn find_in(conn: &mut PgConnection, id: &str) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {NOTE_SOURCE} WHERE n.id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }
}
