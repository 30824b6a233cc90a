//! Shared helpers for HTTP-level integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use cdi_api::config::ServerConfig;
use cdi_api::router::{build_app_router, build_cors_layer};
use cdi_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: "postgres://unused".to_string(),
        db_max_connections: 5,
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let cors = build_cors_layer(&config).unwrap();
    let state = AppState {
        pool,
        config: Arc::new(config),
    };
    build_app_router(state, cors)
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// POST with no body and no content type.
pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

/// POST a raw body labelled as JSON, whether or not it parses.
pub async fn post_raw_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// A valid note creation body.
pub fn note_body(id: &str, patient_name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "patientId": format!("P-{id}"),
        "patientName": patient_name,
        "noteType": "Discharge Summary",
        "department": "Cardiology",
        "admissionDate": "2024-06-15",
        "dischargeDate": "2024-06-18",
        "content": "DISCHARGE SUMMARY"
    })
}

/// A valid suggestion creation body.
pub fn suggestion_body(revenue_impact: f64) -> serde_json::Value {
    serde_json::json!({
        "type": "Specificity",
        "category": "Diagnosis Specificity",
        "description": "Specify type of myocardial infarction",
        "originalText": "acute myocardial infarction",
        "suggestedText": "acute ST-elevation myocardial infarction of inferior wall",
        "reasoning": "STEMI location affects DRG assignment.",
        "revenueImpact": revenue_impact,
        "confidence": 0.92,
        "lineNumber": 45
    })
}

/// Create a note through the API and return its JSON representation.
pub async fn create_note(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(build_test_app(pool.clone()), "/api/v1/notes", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
