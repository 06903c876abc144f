mod dashboard;
mod fragments;
mod raw_data;

pub use dashboard::dashboard_handler;
pub use fragments::{
    current_fragment_handler, forecast_fragment_handler, historical_fragment_handler,
    metrics_fragment_handler,
};
pub use raw_data::raw_data_handler;

use log::warn;
use serde::Deserialize;
use std::sync::Arc;

use crate::db::{CurrentReading, ForecastPoint, HistoricalDay};
use crate::registry;
use crate::AppState;

/// Optional city pair carried by the page URLs; anything absent or
/// unknown falls back to the first available choices.
#[derive(Debug, Deserialize)]
pub struct SelectQuery {
    pub city1: Option<String>,
    pub city2: Option<String>,
}

pub(crate) struct Selection {
    pub cities: Vec<String>,
    pub city1: String,
    pub candidates: Vec<String>,
    pub city2: Option<String>,
}

/// Resolve the requested pair against the available cities. The second
/// city's candidate set always excludes the first; `city2` is `None`
/// exactly when fewer than two cities exist.
///
/// Callers must ensure `cities` is non-empty.
pub(crate) fn resolve_selection(
    cities: Vec<String>,
    want1: Option<&str>,
    want2: Option<&str>,
) -> Selection {
    let city1 = want1
        .filter(|c| cities.iter().any(|x| x == c))
        .map(str::to_string)
        .unwrap_or_else(|| cities[0].clone());
    let candidates: Vec<String> = registry::candidates_for_second(&cities, &city1)
        .into_iter()
        .map(str::to_string)
        .collect();
    let city2 = want2
        .filter(|c| candidates.iter().any(|x| x == c))
        .map(str::to_string)
        .or_else(|| candidates.first().cloned());
    Selection {
        cities,
        city1,
        candidates,
        city2,
    }
}

/// Pattern-match a source read into "rows + ok" or "empty + warning";
/// nothing downstream sees the error itself.
pub(crate) async fn load_current(state: &AppState) -> (Arc<Vec<CurrentReading>>, bool) {
    match state.store.current().await {
        Ok(rows) => (rows, false),
        Err(e) => {
            warn!("current weather source unavailable: {}", e);
            (Arc::new(Vec::new()), true)
        }
    }
}

pub(crate) async fn load_forecast(state: &AppState) -> (Arc<Vec<ForecastPoint>>, bool) {
    match state.store.forecast().await {
        Ok(rows) => (rows, false),
        Err(e) => {
            warn!("forecast source unavailable: {}", e);
            (Arc::new(Vec::new()), true)
        }
    }
}

pub(crate) async fn load_historical(state: &AppState) -> (Arc<Vec<HistoricalDay>>, bool) {
    match state.store.historical().await {
        Ok(rows) => (rows, false),
        Err(e) => {
            warn!("historical source unavailable: {}", e);
            (Arc::new(Vec::new()), true)
        }
    }
}
