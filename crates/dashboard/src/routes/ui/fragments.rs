use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use super::{load_current, load_forecast, load_historical};
use crate::compare;
use crate::db::CurrentReading;
use crate::templates::{
    current_content, forecast_content, historical_content, metrics_content, CurrentComparison,
    ForecastSeries, ForecastView, HistoricalComparison, HistoricalView, HistorySeries, MetricsView,
};
use crate::AppState;

/// Fragment URLs always carry both cities; the dashboard only wires
/// tabs up once a valid pair exists.
#[derive(Debug, Deserialize)]
pub struct PairQuery {
    pub city1: String,
    pub city2: String,
}

pub(crate) fn build_current_comparison(
    rows: &[CurrentReading],
    city1: &str,
    city2: &str,
    source_failed: bool,
) -> CurrentComparison {
    let reading1 = compare::latest_reading(rows, city1).cloned();
    let reading2 = compare::latest_reading(rows, city2).cloned();
    // The radar and delta table need both sides; either missing skips them.
    let comparison = match (&reading1, &reading2) {
        (Some(first), Some(second)) => Some(compare::quick_comparison(first, second)),
        _ => None,
    };
    CurrentComparison {
        city1: city1.to_string(),
        city2: city2.to_string(),
        reading1,
        reading2,
        comparison,
        source_failed,
    }
}

/// Handler for the current weather tab (GET /fragments/current)
pub async fn current_fragment_handler(
    State(state): State<Arc<AppState>>,
    Query(pair): Query<PairQuery>,
) -> Html<String> {
    let (rows, source_failed) = load_current(&state).await;
    let view = build_current_comparison(&rows, &pair.city1, &pair.city2, source_failed);
    Html(current_content(&view).into_string())
}

/// Handler for the forecast tab (GET /fragments/forecast)
pub async fn forecast_fragment_handler(
    State(state): State<Arc<AppState>>,
    Query(pair): Query<PairQuery>,
) -> Html<String> {
    let (rows, source_failed) = load_forecast(&state).await;
    let series = compare::forecast_pair(&rows, &pair.city1, &pair.city2).map(|(first, second)| {
        (
            ForecastSeries::from_points(&first),
            ForecastSeries::from_points(&second),
        )
    });
    let view = ForecastView {
        city1: pair.city1,
        city2: pair.city2,
        pair: series,
        source_failed,
    };
    Html(forecast_content(&view).into_string())
}

/// Handler for the historical analysis tab (GET /fragments/historical)
pub async fn historical_fragment_handler(
    State(state): State<Arc<AppState>>,
    Query(pair): Query<PairQuery>,
) -> Html<String> {
    let (rows, source_failed) = load_historical(&state).await;

    // Both-or-nothing: one empty side skips the whole section.
    let comparison = match (
        compare::historical_summary(&rows, &pair.city1),
        compare::historical_summary(&rows, &pair.city2),
    ) {
        (Some(summary1), Some(summary2)) => Some(HistoricalComparison {
            delta: compare::summary_delta(&summary1, &summary2),
            series1: HistorySeries::from_days(&compare::historical_for(&rows, &pair.city1)),
            series2: HistorySeries::from_days(&compare::historical_for(&rows, &pair.city2)),
            summary1,
            summary2,
        }),
        _ => None,
    };

    let view = HistoricalView {
        city1: pair.city1,
        city2: pair.city2,
        comparison,
        source_failed,
    };
    Html(historical_content(&view).into_string())
}

/// Handler for the detailed metrics tab (GET /fragments/metrics)
pub async fn metrics_fragment_handler(
    State(state): State<Arc<AppState>>,
    Query(pair): Query<PairQuery>,
) -> Html<String> {
    let (current_rows, current_failed) = load_current(&state).await;
    let (historical_rows, historical_failed) = load_historical(&state).await;

    let mut summaries = Vec::new();
    for city in [&pair.city1, &pair.city2] {
        if let Some(summary) = compare::historical_summary(&historical_rows, city) {
            summaries.push((city.clone(), summary));
        }
    }

    let view = MetricsView {
        latest1: compare::latest_reading(&current_rows, &pair.city1).cloned(),
        latest2: compare::latest_reading(&current_rows, &pair.city2).cloned(),
        city1: pair.city1,
        city2: pair.city2,
        summaries,
        current_failed,
        historical_failed,
    };
    Html(metrics_content(&view).into_string())
}
