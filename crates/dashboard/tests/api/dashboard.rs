use crate::helpers::{missing_source_error, mock_reading, spawn_app, MockWeatherStore};
use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use cityweather::Source;
use hyper::{header, Method};
use std::sync::Arc;
use time::macros::datetime;
use tower::ServiceExt;

async fn get_html(app: &crate::helpers::TestApp, uri: &str) -> (hyper::StatusCode, String) {
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

/// The dashboard defaults to the first two cities of the sorted union
/// and renders the current-weather tab inline.
#[tokio::test]
async fn dashboard_renders_first_two_cities_by_default() {
    let mut store = MockWeatherStore::new();

    store.expect_distinct_cities().times(3).returning(|source| {
        Ok(match source {
            Source::Current => vec!["Tokyo".to_string(), "Berlin".to_string()],
            Source::Forecast => vec!["Tokyo".to_string()],
            Source::Historical => vec![],
        })
    });
    store.expect_fetch_current().times(1).returning(|| {
        Ok(vec![
            mock_reading("Berlin", 18.5, datetime!(2026-08-25 09:00:00 UTC)),
            mock_reading("Tokyo", 27.0, datetime!(2026-08-25 09:00:00 UTC)),
        ])
    });

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, html) = get_html(&test_app, "/").await;

    assert!(status.is_success());
    // Sorted union puts Berlin first.
    assert!(html.contains("Current Weather: Berlin vs Tokyo"));
    assert!(html.contains("Found 2 cities in database"));
    assert!(html.contains("18.5°C"));
    assert!(html.contains("27.0°C"));
}

/// Requested cities survive the round trip through query parameters.
#[tokio::test]
async fn dashboard_honors_requested_pair() {
    let mut store = MockWeatherStore::new();

    store.expect_distinct_cities().times(3).returning(|_| {
        Ok(vec![
            "Berlin".to_string(),
            "Oslo".to_string(),
            "Tokyo".to_string(),
        ])
    });
    store.expect_fetch_current().times(1).returning(|| Ok(vec![]));

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, html) = get_html(&test_app, "/?city1=Oslo&city2=Tokyo").await;

    assert!(status.is_success());
    assert!(html.contains("Current Weather: Oslo vs Tokyo"));
}

/// Empty databases fall back to the fixed city list instead of an
/// error page.
#[tokio::test]
async fn dashboard_falls_back_to_fixed_cities_when_databases_are_empty() {
    let mut store = MockWeatherStore::new();

    store
        .expect_distinct_cities()
        .times(3)
        .returning(|_| Ok(vec![]));
    store.expect_fetch_current().times(1).returning(|| Ok(vec![]));

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, html) = get_html(&test_app, "/").await;

    assert!(status.is_success());
    // Fallback list order is preserved, not sorted.
    assert!(html.contains("Current Weather: Nairobi vs Sydney"));
    assert!(html.contains("New York"));
    assert!(html.contains("London"));
}

/// A single known city disables the comparison instead of pairing a
/// city with itself.
#[tokio::test]
async fn dashboard_rejects_single_city_comparison() {
    let mut store = MockWeatherStore::new();

    store.expect_distinct_cities().times(3).returning(|source| {
        Ok(match source {
            Source::Current => vec!["Berlin".to_string()],
            _ => vec![],
        })
    });

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, html) = get_html(&test_app, "/").await;

    assert!(status.is_success());
    assert!(html.contains("Need at least 2 cities in database for comparison"));
}

/// A broken current database degrades to a warning, never a 500.
#[tokio::test]
async fn dashboard_shows_warning_when_current_source_fails() {
    let mut store = MockWeatherStore::new();

    store
        .expect_distinct_cities()
        .times(3)
        .returning(|_| Ok(vec!["Berlin".to_string(), "Tokyo".to_string()]));
    store
        .expect_fetch_current()
        .times(1)
        .returning(|| Err(missing_source_error()));

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, html) = get_html(&test_app, "/").await;

    assert!(status.is_success());
    assert!(html.contains("The current weather database is unavailable"));
}

/// The raw data page lists rows for the selected cities only.
#[tokio::test]
async fn raw_data_page_filters_to_selected_cities() {
    let mut store = MockWeatherStore::new();

    store.expect_distinct_cities().times(3).returning(|_| {
        Ok(vec![
            "Berlin".to_string(),
            "Oslo".to_string(),
            "Tokyo".to_string(),
        ])
    });
    store.expect_fetch_current().times(1).returning(|| {
        Ok(vec![
            mock_reading("Berlin", 18.5, datetime!(2026-08-25 09:00:00 UTC)),
            mock_reading("Oslo", 14.0, datetime!(2026-08-25 09:00:00 UTC)),
        ])
    });
    store.expect_fetch_forecast().times(1).returning(|| Ok(vec![]));
    store
        .expect_fetch_historical()
        .times(1)
        .returning(|| Ok(vec![]));

    let test_app = spawn_app(Arc::new(store)).await;
    let (status, html) = get_html(&test_app, "/raw?city1=Berlin&city2=Tokyo").await;

    assert!(status.is_success());
    assert!(html.contains("Berlin"));
    // Oslo has rows but is not part of the selected pair.
    assert!(!html.contains("14.0"));
}
