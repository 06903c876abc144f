use std::sync::Arc;

use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{
    header::{ACCEPT, CONTENT_TYPE},
    Method,
};
use log::info;
use time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::db::{CachedStore, SqliteStore};
use crate::routes::{
    api, current_fragment_handler, dashboard_handler, forecast_fragment_handler,
    historical_fragment_handler, metrics_fragment_handler, raw_data_handler,
};
use crate::{compare, db, routes};

#[derive(Clone)]
pub struct AppState {
    pub static_dir: String,
    pub remote_url: String,
    pub store: Arc<CachedStore>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::api::get_cities,
        routes::api::get_current,
        routes::api::get_forecast,
        routes::api::get_historical_summary,
    ),
    components(
        schemas(
            api::CityList,
            api::CurrentResponse,
            api::ForecastResponse,
            api::SummaryResponse,
            db::CurrentReading,
            db::ForecastPoint,
            db::HistoricalDay,
            compare::HistoricalSummary,
        )
    ),
    tags(
        (name = "cityweather api", description = "read-only access to the multi-city weather comparison data")
    )
)]
struct ApiDoc;

pub fn build_app_state(
    remote_url: String,
    static_dir: String,
    data_dir: String,
    cache_ttl: Duration,
) -> AppState {
    info!("reading weather databases from: {}", data_dir);
    let store = Arc::new(SqliteStore::new(data_dir));
    AppState {
        static_dir,
        remote_url,
        store: Arc::new(CachedStore::new(store, cache_ttl)),
    }
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let serve_static = ServeDir::new(&app_state.static_dir);
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        // UI routes
        .route("/", get(dashboard_handler))
        .route("/raw", get(raw_data_handler))
        // HTMX fragment routes
        .route("/fragments/current", get(current_fragment_handler))
        .route("/fragments/forecast", get(forecast_fragment_handler))
        .route("/fragments/historical", get(historical_fragment_handler))
        .route("/fragments/metrics", get(metrics_fragment_handler))
        // API routes
        .route("/api/cities", get(api::get_cities))
        .route("/api/current", get(api::get_current))
        .route("/api/forecast", get(api::get_forecast))
        .route("/api/historical/summary", get(api::get_historical_summary))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .nest_service("/static", serve_static)
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
