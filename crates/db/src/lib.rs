//! Persistence layer: entity models, repositories, and embedded migrations.

use serde::Serialize;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Pool size used when `DB_MAX_CONNECTIONS` is not configured.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the store is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Migrations embedded from `db/migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations");

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// How far the connected database's schema has been migrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaStatus {
    /// Highest successfully applied migration version.
    pub latest_version: Option<i64>,
    /// Successfully applied migrations.
    pub applied: i64,
    /// Migrations this build ships with.
    pub expected: i64,
    /// Every shipped migration has been applied.
    pub up_to_date: bool,
}

/// Compare the migrations recorded in `_sqlx_migrations` with the embedded set.
pub async fn schema_status(pool: &DbPool) -> Result<SchemaStatus, sqlx::Error> {
    let (latest_version, applied): (Option<i64>, i64) = sqlx::query_as(
        "SELECT MAX(version), COUNT(*) FROM _sqlx_migrations WHERE success",
    )
    .fetch_one(pool)
    .await?;

    let expected = MIGRATOR
        .iter()
        .filter(|m| m.migration_type.is_up_migration())
        .count() as i64;

    Ok(SchemaStatus {
        latest_version,
        applied,
        expected,
        up_to_date: applied >= expected,
    })
}
