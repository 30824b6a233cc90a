//! Integration tests for metric history samples.

use cdi_db::models::metric_sample::{CreateMetricSample, MetricSampleQuery};
use cdi_db::repositories::MetricSampleRepo;
use sqlx::PgPool;

fn sample(name: &str, value: f64, date: &str, department: Option<&str>) -> CreateMetricSample {
    CreateMetricSample {
        metric_name: Some(name.to_string()),
        metric_value: Some(value),
        metric_date: Some(date.to_string()),
        department: department.map(String::from),
        user_id: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_record_and_list(pool: PgPool) {
    let new = sample("acceptance_rate", 82.5, "2024-06-30", Some("Cardiology"))
        .prepare()
        .unwrap();
    let created = MetricSampleRepo::create(&pool, &new).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.metric_date.to_string(), "2024-06-30");

    let filter = MetricSampleQuery::default().prepare().unwrap();
    let listed = MetricSampleRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_and_orders(pool: PgPool) {
    for req in [
        sample("revenue", 1000.0, "2024-05-31", Some("Cardiology")),
        sample("revenue", 1500.0, "2024-06-30", Some("Cardiology")),
        sample("revenue", 700.0, "2024-06-30", Some("Neurology")),
        sample("acceptance_rate", 80.0, "2024-06-30", None),
    ] {
        MetricSampleRepo::create(&pool, &req.prepare().unwrap())
            .await
            .unwrap();
    }

    let filter = MetricSampleQuery {
        metric_name: Some("revenue".into()),
        department: Some("Cardiology".into()),
        ..Default::default()
    }
    .prepare()
    .unwrap();
    let rows = MetricSampleRepo::list(&pool, &filter).await.unwrap();
    let values: Vec<f64> = rows.iter().map(|r| r.metric_value).collect();
    assert_eq!(values, vec![1500.0, 1000.0]);

    let filter = MetricSampleQuery {
        from: Some("2024-06-01".into()),
        to: Some("2024-06-30".into()),
        ..Default::default()
    }
    .prepare()
    .unwrap();
    let rows = MetricSampleRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.metric_date.to_string() == "2024-06-30"));

    let everything = MetricSampleRepo::list(&pool, &Default::default()).await.unwrap();
    assert_eq!(everything.len(), 4);
}
