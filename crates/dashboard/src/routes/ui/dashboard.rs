use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};

use super::{load_current, resolve_selection, SelectQuery};
use crate::registry;
use crate::routes::ui::fragments::build_current_comparison;
use crate::templates::{dashboard_page, no_cities_page, DashboardData};
use crate::AppState;

/// Handler for the dashboard page (GET /)
pub async fn dashboard_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectQuery>,
) -> Html<String> {
    let cities = registry::available_cities(&state.store).await;
    if cities.is_empty() {
        return Html(no_cities_page(&state.remote_url).into_string());
    }

    let selection = resolve_selection(cities, query.city1.as_deref(), query.city2.as_deref());

    // The first tab renders inline; the others load as fragments.
    let current = match &selection.city2 {
        Some(city2) => {
            let (rows, source_failed) = load_current(&state).await;
            Some(build_current_comparison(
                &rows,
                &selection.city1,
                city2,
                source_failed,
            ))
        }
        None => None,
    };

    let data = DashboardData {
        cities: selection.cities,
        city1: selection.city1,
        candidates: selection.candidates,
        city2: selection.city2,
        current,
    };
    Html(dashboard_page(&state.remote_url, &data).into_string())
}
