//! Repository for the `metric_samples` table.

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::metric_sample::{MetricSample, MetricSampleFilter, NewMetricSample};

/// Column list for metric_samples queries.
const COLUMNS: &str =
    "id, metric_name, metric_value, metric_date, department, user_id, created_at, updated_at";

/// Provides append and filtered listing of metric history samples.
pub struct MetricSampleRepo;

impl MetricSampleRepo {
    /// Record a sample, returning the stored row.
    pub async fn create(
        pool: &PgPool,
        input: &NewMetricSample,
    ) -> Result<MetricSample, sqlx::Error> {
        let query = format!(
            "INSERT INTO metric_samples (metric_name, metric_value, metric_date, department, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MetricSample>(&query)
            .bind(&input.metric_name)
            .bind(input.metric_value)
            .bind(input.metric_date)
            .bind(&input.department)
            .bind(&input.user_id)
            .fetch_one(pool)
            .await
    }

    /// List samples matching the filter, newest metric date first.
    pub async fn list(
        pool: &PgPool,
        filter: &MetricSampleFilter,
    ) -> Result<Vec<MetricSample>, sqlx::Error> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM metric_samples WHERE TRUE"));

        if let Some(name) = &filter.metric_name {
            qb.push(" AND metric_name = ").push_bind(name);
        }
        if let Some(department) = &filter.department {
            qb.push(" AND department = ").push_bind(department);
        }
        if let Some(from) = filter.from {
            qb.push(" AND metric_date >= ").push_bind(from);
        }
        if let Some(to) = filter.to {
            qb.push(" AND metric_date <= ").push_bind(to);
        }

        qb.push(" ORDER BY metric_date DESC, created_at DESC, id DESC");

        qb.build_query_as::<MetricSample>().fetch_all(pool).await
    }
}
