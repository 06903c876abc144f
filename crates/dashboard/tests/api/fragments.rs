use crate::helpers::{
    missing_source_error, mock_forecast_point, mock_historical_day, mock_reading, spawn_app,
    MockWeatherStore,
};
use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use hyper::{header, Method};
use std::sync::Arc;
use time::macros::datetime;
use tower::ServiceExt;

async fn get_fragment(app: &crate::helpers::TestApp, uri: &str) -> (hyper::StatusCode, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::ACCEPT, "text/html")
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
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// The current fragment renders both metric cards, the radar chart and
/// the delta table when both cities have readings.
#[tokio::test]
async fn current_fragment_renders_cards_and_comparison() {
    let mut store = MockWeatherStore::new();

    store.expect_fetch_current().times(1).returning(|| {
        Ok(vec![
            mock_reading("Berlin", 18.5, datetime!(2026-08-25 09:00:00 UTC)),
            mock_reading("Tokyo", 27.0, datetime!(2026-08-25 09:00:00 UTC)),
        ])
    });

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, html) = get_fragment(&test_app, "/fragments/current?city1=Berlin&city2=Tokyo").await;

    assert!(status.is_success());
    assert!(html.contains("18.5°C"));
    assert!(html.contains("27.0°C"));
    assert!(html.contains("Quick Comparison"));
    assert!(html.contains("<svg"));
    // Tokyo minus Berlin, always second minus first.
    assert!(html.contains("+8.5°C"));
}

/// The latest reading wins by recorded-at time, not by row order.
#[tokio::test]
async fn current_fragment_uses_most_recent_reading() {
    let mut store = MockWeatherStore::new();

    store.expect_fetch_current().times(1).returning(|| {
        Ok(vec![
            mock_reading("Berlin", 30.0, datetime!(2026-08-25 11:00:00 UTC)),
            mock_reading("Berlin", 18.5, datetime!(2026-08-25 09:00:00 UTC)),
            mock_reading("Tokyo", 27.0, datetime!(2026-08-25 09:00:00 UTC)),
        ])
    });

    let test_app = spawn_app(Arc::new(store)).await;
    let (_, html) = get_fragment(&test_app, "/fragments/current?city1=Berlin&city2=Tokyo").await;

    assert!(html.contains("30.0°C"));
    assert!(!html.contains("18.5°C"));
}

/// One city without forecast rows collapses the whole tab; a partial
/// comparison is never shown.
#[tokio::test]
async fn forecast_fragment_is_both_or_nothing() {
    let mut store = MockWeatherStore::new();

    store.expect_fetch_forecast().times(1).returning(|| {
        Ok(vec![
            mock_forecast_point("Berlin", 19.0, 0),
            mock_forecast_point("Berlin", 21.0, 3),
        ])
    });

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, html) =
        get_fragment(&test_app, "/fragments/forecast?city1=Berlin&city2=Tokyo").await;

    assert!(status.is_success());
    assert!(html.contains("Insufficient forecast data for comparison"));
    assert!(!html.contains("Temperature Forecast"));
}

#[tokio::test]
async fn forecast_fragment_renders_three_charts() {
    let mut store = MockWeatherStore::new();

    store.expect_fetch_forecast().times(1).returning(|| {
        Ok(vec![
            mock_forecast_point("Berlin", 19.0, 0),
            mock_forecast_point("Berlin", 21.0, 3),
            mock_forecast_point("Tokyo", 28.0, 0),
            mock_forecast_point("Tokyo", 26.0, 3),
        ])
    });

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, html) =
        get_fragment(&test_app, "/fragments/forecast?city1=Berlin&city2=Tokyo").await;

    assert!(status.is_success());
    assert!(html.contains("Temperature Forecast"));
    assert!(html.contains("Precipitation Forecast"));
    assert!(html.contains("Humidity Forecast"));
}

/// Summary boxes show each side's mean and the signed delta.
#[tokio::test]
async fn historical_fragment_shows_summaries_and_delta() {
    let mut store = MockWeatherStore::new();

    store.expect_fetch_historical().times(1).returning(|| {
        Ok(vec![
            mock_historical_day("Berlin", 10.0, 1),
            mock_historical_day("Berlin", 20.0, 2),
            mock_historical_day("Berlin", 30.0, 3),
            mock_historical_day("Tokyo", 15.0, 1),
            mock_historical_day("Tokyo", 25.0, 2),
            mock_historical_day("Tokyo", 35.0, 3),
        ])
    });

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, html) =
        get_fragment(&test_app, "/fragments/historical?city1=Berlin&city2=Tokyo").await;

    assert!(status.is_success());
    assert!(html.contains("Period Averages"));
    assert!(html.contains("20.0°C"));
    assert!(html.contains("25.0°C"));
    assert!(html.contains("+5.0°C"));
    assert!(html.contains("Temperature Trend"));
    assert!(html.contains("Precipitation Comparison"));
}

#[tokio::test]
async fn historical_fragment_degrades_when_source_fails() {
    let mut store = MockWeatherStore::new();

    store
        .expect_fetch_historical()
        .times(1)
        .returning(|| Err(missing_source_error()));

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, html) =
        get_fragment(&test_app, "/fragments/historical?city1=Berlin&city2=Tokyo").await;

    assert!(status.is_success());
    assert!(html.contains("The historical database is unavailable"));
}

/// The metrics tab combines the latest readings with the per-city
/// historical summary table; cities without history are left out.
#[tokio::test]
async fn metrics_fragment_renders_summary_table() {
    let mut store = MockWeatherStore::new();

    store.expect_fetch_current().times(1).returning(|| {
        Ok(vec![mock_reading(
            "Berlin",
            18.5,
            datetime!(2026-08-25 09:00:00 UTC),
        )])
    });
    store.expect_fetch_historical().times(1).returning(|| {
        Ok(vec![
            mock_historical_day("Berlin", 10.0, 1),
            mock_historical_day("Berlin", 20.0, 2),
        ])
    });

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, html) =
        get_fragment(&test_app, "/fragments/metrics?city1=Berlin&city2=Tokyo").await;

    assert!(status.is_success());
    assert!(html.contains("Avg Temperature (°C)"));
    assert!(html.contains("15.00"));
    assert!(html.contains("No current data for Tokyo"));
}
