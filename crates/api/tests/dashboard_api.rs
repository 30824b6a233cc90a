//! HTTP-level integration tests for the dashboard metrics endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_note, get, note_body, post_empty, suggestion_body};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_dashboard(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/dashboard/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let m = &json["data"];
    assert_eq!(m["totalNotes"], 0);
    assert_eq!(m["totalSuggestions"], 0);
    assert_eq!(m["acceptanceRate"], 0.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_reflects_current_state(pool: PgPool) {
    for (i, status) in ["pending", "pending", "in-review", "completed", "completed"]
        .iter()
        .enumerate()
    {
        let mut body = note_body(&format!("N00{i}"), "Patient");
        body["status"] = json!(status);
        if i == 0 {
            body["priority"] = json!("high");
            let mut s = suggestion_body(1000.0);
            s["id"] = json!("S1");
            body["suggestions"] = json!([s, suggestion_body(500.0)]);
        }
        create_note(&pool, body).await;
    }

    let response = post_empty(build_test_app(pool.clone()), "/api/v1/suggestions/S1/accept").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(build_test_app(pool), "/api/v1/dashboard/metrics").await;
    let json = body_json(response).await;
    let m = &json["data"];
    assert_eq!(m["totalNotes"], 5);
    assert_eq!(m["pendingNotes"], 2);
    assert_eq!(m["highPriorityNotes"], 1);
    assert_eq!(m["totalRevenue"], 1500.0);
    assert_eq!(m["totalSuggestions"], 2);
    assert_eq!(m["acceptedSuggestions"], 1);
    assert_eq!(m["acceptanceRate"], 50.0);
}
