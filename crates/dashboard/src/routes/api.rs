//! Read-only JSON API over the same shapes the UI consumes.
//!
//! Source failures degrade the same way the UI does: a warning in the
//! log and an empty result, never a 500.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::compare::{self, HistoricalSummary};
use crate::db::{CurrentReading, ForecastPoint};
use crate::registry;
use crate::routes::ui::{load_current, load_forecast, load_historical};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct CityParam {
    /// City identifier exactly as it appears in /api/cities.
    pub city: String,
}

#[derive(Serialize, ToSchema)]
pub struct CityList {
    pub cities: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CurrentResponse {
    pub city: String,
    /// The most recent reading, absent when the city has no current rows.
    pub reading: Option<CurrentReading>,
}

#[derive(Serialize, ToSchema)]
pub struct ForecastResponse {
    pub city: String,
    /// Raw forecast window ordered by timestamp ascending.
    pub points: Vec<ForecastPoint>,
}

#[derive(Serialize, ToSchema)]
pub struct SummaryResponse {
    pub city: String,
    /// Six-scalar historical summary, absent when the city has no rows.
    pub summary: Option<HistoricalSummary>,
}

/// All cities observed across the three weather databases
#[utoipa::path(
    get,
    path = "/api/cities",
    responses(
        (status = 200, description = "Sorted, deduplicated city list (or the fixed fallback)", body = CityList)
    )
)]
pub async fn get_cities(State(state): State<Arc<AppState>>) -> Json<CityList> {
    Json(CityList {
        cities: registry::available_cities(&state.store).await,
    })
}

/// Most recent current reading for one city
#[utoipa::path(
    get,
    path = "/api/current",
    params(CityParam),
    responses(
        (status = 200, description = "Latest reading by recorded-at time", body = CurrentResponse)
    )
)]
pub async fn get_current(
    State(state): State<Arc<AppState>>,
    Query(param): Query<CityParam>,
) -> Json<CurrentResponse> {
    let (rows, _) = load_current(&state).await;
    Json(CurrentResponse {
        reading: compare::latest_reading(&rows, &param.city).cloned(),
        city: param.city,
    })
}

/// Forecast window for one city
#[utoipa::path(
    get,
    path = "/api/forecast",
    params(CityParam),
    responses(
        (status = 200, description = "Forecast points ordered by timestamp", body = ForecastResponse)
    )
)]
pub async fn get_forecast(
    State(state): State<Arc<AppState>>,
    Query(param): Query<CityParam>,
) -> Json<ForecastResponse> {
    let (rows, _) = load_forecast(&state).await;
    Json(ForecastResponse {
        points: compare::forecast_for(&rows, &param.city)
            .into_iter()
            .cloned()
            .collect(),
        city: param.city,
    })
}

/// Historical summary statistics for one city
#[utoipa::path(
    get,
    path = "/api/historical/summary",
    params(CityParam),
    responses(
        (status = 200, description = "Mean/sum/min/max over the city's historical days", body = SummaryResponse)
    )
)]
pub async fn get_historical_summary(
    State(state): State<Arc<AppState>>,
    Query(param): Query<CityParam>,
) -> Json<SummaryResponse> {
    let (rows, _) = load_historical(&state).await;
    Json(SummaryResponse {
        summary: compare::historical_summary(&rows, &param.city),
        city: param.city,
    })
}
