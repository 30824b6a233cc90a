//! Handlers for persisted metric history samples.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use cdi_db::models::metric_sample::{CreateMetricSample, MetricSampleQuery};
use cdi_db::repositories::MetricSampleRepo;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /analytics/metrics?metricName=&department=&from=&to=
pub async fn list_metric_samples(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<MetricSampleQuery>,
) -> AppResult<impl IntoResponse> {
    let filter = params.prepare()?;
    let samples = MetricSampleRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: samples }))
}

/// POST /analytics/metrics
pub async fn record_metric_sample(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateMetricSample>,
) -> AppResult<impl IntoResponse> {
    let new_sample = input.prepare()?;
    let sample = MetricSampleRepo::create(&state.pool, &new_sample).await?;

    tracing::info!(
        sample_id = sample.id,
        metric_name = %sample.metric_name,
        metric_date = %sample.metric_date,
        "Metric sample recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: sample })))
}
