use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};

use super::{load_current, load_forecast, load_historical, resolve_selection, SelectQuery};
use crate::registry;
use crate::templates::{no_cities_page, raw_data_page, RawDataView};
use crate::AppState;

/// Per-table display cap; full extracts go through the JSON API.
const RAW_ROW_CAP: usize = 200;

/// Handler for the raw data page (GET /raw)
pub async fn raw_data_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectQuery>,
) -> Html<String> {
    let cities = registry::available_cities(&state.store).await;
    if cities.is_empty() {
        return Html(no_cities_page(&state.remote_url).into_string());
    }
    let selection = resolve_selection(cities, query.city1.as_deref(), query.city2.as_deref());

    let mut selected = vec![selection.city1.clone()];
    if let Some(city2) = &selection.city2 {
        selected.push(city2.clone());
    }

    let mut warnings = Vec::new();
    let (current_rows, current_failed) = load_current(&state).await;
    if current_failed {
        warnings.push("The current weather database is unavailable.".to_string());
    }
    let (forecast_rows, forecast_failed) = load_forecast(&state).await;
    if forecast_failed {
        warnings.push("The forecast database is unavailable.".to_string());
    }
    let (historical_rows, historical_failed) = load_historical(&state).await;
    if historical_failed {
        warnings.push("The historical database is unavailable.".to_string());
    }

    let mut truncated = false;
    let mut capped = |len: usize| {
        if len > RAW_ROW_CAP {
            truncated = true;
        }
    };

    let current: Vec<_> = current_rows
        .iter()
        .filter(|r| selected.contains(&r.city))
        .cloned()
        .collect();
    capped(current.len());
    let forecast: Vec<_> = forecast_rows
        .iter()
        .filter(|r| selected.contains(&r.city))
        .cloned()
        .collect();
    capped(forecast.len());
    let historical: Vec<_> = historical_rows
        .iter()
        .filter(|r| selected.contains(&r.city))
        .cloned()
        .collect();
    capped(historical.len());

    let view = RawDataView {
        cities: selected,
        current: current.into_iter().take(RAW_ROW_CAP).collect(),
        forecast: forecast.into_iter().take(RAW_ROW_CAP).collect(),
        historical: historical.into_iter().take(RAW_ROW_CAP).collect(),
        warnings,
        truncated,
    };
    Html(raw_data_page(&state.remote_url, &view).into_string())
}
