use axum::extract::State;
use axum::{routing::get, Json, Router};
use cdi_db::SchemaStatus;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the store is reachable and fully migrated, else `degraded`.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Migration state; `null` when it could not be read.
    pub schema: Option<SchemaStatus>,
}

/// GET /health -- returns service, database and schema health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = cdi_db::health_check(&state.pool).await.is_ok();

    let schema = if db_healthy {
        cdi_db::schema_status(&state.pool)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to read migration state"))
            .ok()
    } else {
        None
    };

    let status = match &schema {
        Some(s) if s.up_to_date => "ok",
        _ => "degraded",
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema,
    })
}

/// Mount health check routes (root-level, not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
