pub mod components;
pub mod fragments;
pub mod layouts;
pub mod pages;

pub use fragments::{
    current_content, forecast_content, historical_content, metrics_content, CurrentComparison,
    ForecastSeries, ForecastView, HistoricalComparison, HistoricalView, HistorySeries, MetricsView,
    CITY1_COLOR, CITY2_COLOR,
};
pub use layouts::{base, CurrentPage, PageConfig};
pub use pages::{
    dashboard::DashboardData, dashboard_page, no_cities_page, raw_data::RawDataView, raw_data_page,
};
