use crate::helpers::{mock_historical_day, mock_reading, spawn_app, MockWeatherStore};
use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use cityweather::Source;
use hyper::{header, Method};
use serde_json::Value;
use std::sync::Arc;
use time::macros::datetime;
use tower::ServiceExt;

async fn get_json(app: &crate::helpers::TestApp, uri: &str) -> (hyper::StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::ACCEPT, "application/json")
        .body(Body::empty())
        .unwrap();

    let response = app
        .app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request.");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

/// The city list is the union across all three sources, sorted and
/// deduplicated.
#[tokio::test]
async fn cities_endpoint_returns_sorted_union() {
    let mut store = MockWeatherStore::new();

    store.expect_distinct_cities().times(3).returning(|source| {
        Ok(match source {
            Source::Current => vec!["Tokyo".to_string(), "Berlin".to_string()],
            Source::Forecast => vec!["Berlin".to_string(), "Oslo".to_string()],
            Source::Historical => vec!["Oslo".to_string()],
        })
    });

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, json) = get_json(&test_app, "/api/cities").await;

    assert!(status.is_success());
    assert_eq!(json["cities"], serde_json::json!(["Berlin", "Oslo", "Tokyo"]));
}

#[tokio::test]
async fn cities_endpoint_falls_back_when_sources_are_empty() {
    let mut store = MockWeatherStore::new();

    store
        .expect_distinct_cities()
        .times(3)
        .returning(|_| Ok(vec![]));

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, json) = get_json(&test_app, "/api/cities").await;

    assert!(status.is_success());
    assert_eq!(
        json["cities"],
        serde_json::json!(["Nairobi", "Sydney", "New York", "London"])
    );
}

/// The current endpoint picks the reading with the greatest recorded-at
/// time for the requested city.
#[tokio::test]
async fn current_endpoint_returns_latest_reading() {
    let mut store = MockWeatherStore::new();

    store.expect_fetch_current().times(1).returning(|| {
        Ok(vec![
            mock_reading("Berlin", 18.5, datetime!(2026-08-25 09:00:00 UTC)),
            mock_reading("Berlin", 21.0, datetime!(2026-08-25 12:00:00 UTC)),
            mock_reading("Tokyo", 27.0, datetime!(2026-08-25 12:00:00 UTC)),
        ])
    });

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, json) = get_json(&test_app, "/api/current?city=Berlin").await;

    assert!(status.is_success());
    assert_eq!(json["city"], "Berlin");
    assert_eq!(json["reading"]["temp_c"], 21.0);
}

/// An unknown city is a 200 with a null reading, not an error.
#[tokio::test]
async fn current_endpoint_returns_null_for_unknown_city() {
    let mut store = MockWeatherStore::new();

    store.expect_fetch_current().times(1).returning(|| Ok(vec![]));

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, json) = get_json(&test_app, "/api/current?city=Atlantis").await;

    assert!(status.is_success());
    assert!(json["reading"].is_null());
}

/// The forecast endpoint only returns the requested city's points.
#[tokio::test]
async fn forecast_endpoint_filters_by_city() {
    let mut store = MockWeatherStore::new();

    store.expect_fetch_forecast().times(1).returning(|| {
        Ok(vec![
            crate::helpers::mock_forecast_point("Berlin", 19.0, 0),
            crate::helpers::mock_forecast_point("Tokyo", 28.0, 0),
            crate::helpers::mock_forecast_point("Berlin", 21.0, 3),
        ])
    });

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, json) = get_json(&test_app, "/api/forecast?city=Berlin").await;

    assert!(status.is_success());
    let points = json["points"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert!(points.iter().all(|p| p["city"] == "Berlin"));
}

#[tokio::test]
async fn historical_summary_endpoint_computes_statistics() {
    let mut store = MockWeatherStore::new();

    store.expect_fetch_historical().times(1).returning(|| {
        Ok(vec![
            mock_historical_day("Berlin", 10.0, 1),
            mock_historical_day("Berlin", 20.0, 2),
            mock_historical_day("Berlin", 30.0, 3),
        ])
    });

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, json) = get_json(&test_app, "/api/historical/summary?city=Berlin").await;

    assert!(status.is_success());
    assert_eq!(json["summary"]["mean_temp_c"], 20.0);
    assert_eq!(json["summary"]["max_temp_c"], 30.0);
    assert_eq!(json["summary"]["min_temp_c"], 10.0);
    assert_eq!(json["summary"]["total_precip_mm"], 7.5);
}

/// A city with no historical rows gets a null summary, never zeros.
#[tokio::test]
async fn historical_summary_endpoint_returns_null_when_unavailable() {
    let mut store = MockWeatherStore::new();

    store
        .expect_fetch_historical()
        .times(1)
        .returning(|| Ok(vec![]));

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, json) = get_json(&test_app, "/api/historical/summary?city=Berlin").await;

    assert!(status.is_success());
    assert!(json["summary"].is_null());
}
