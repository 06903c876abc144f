use maud::{html, Markup};
use time::format_description::well_known::Rfc3339;

use crate::compare::HistoricalSummary;
use crate::db::CurrentReading;
use crate::templates::components::{info_notice, warning_notice};

/// Everything the detailed-metrics tab renders: each city's latest
/// current row and the six-scalar historical summary per city (only
/// cities with historical rows appear).
pub struct MetricsView {
    pub city1: String,
    pub city2: String,
    pub latest1: Option<CurrentReading>,
    pub latest2: Option<CurrentReading>,
    pub summaries: Vec<(String, HistoricalSummary)>,
    pub current_failed: bool,
    pub historical_failed: bool,
}

pub fn metrics_content(view: &MetricsView) -> Markup {
    html! {
        h2 class="title is-4" { "Detailed Metrics & Data Tables" }

        @if view.current_failed {
            (warning_notice("The current weather database is unavailable."))
        }

        div class="columns" {
            div class="column is-half" {
                h3 class="title is-6" { (view.city1) " Current Weather" }
                @if let Some(reading) = &view.latest1 {
                    (current_table(reading))
                } @else if !view.current_failed {
                    (info_notice(&format!("No current data for {}", view.city1)))
                }
            }
            div class="column is-half" {
                h3 class="title is-6" { (view.city2) " Current Weather" }
                @if let Some(reading) = &view.latest2 {
                    (current_table(reading))
                } @else if !view.current_failed {
                    (info_notice(&format!("No current data for {}", view.city2)))
                }
            }
        }

        hr;
        h3 class="title is-5" { "Historical Statistics Summary" }
        @if view.historical_failed {
            (warning_notice("The historical database is unavailable."))
        } @else {
            @if view.summaries.is_empty() {
                (info_notice("No historical data available."))
            } @else {
                div class="table-container" {
                    table class="table is-fullwidth is-striped is-hoverable" {
                        thead {
                            tr {
                                th { "City" }
                                th class="has-text-right" { "Avg Temperature (°C)" }
                                th class="has-text-right" { "Max Temperature (°C)" }
                                th class="has-text-right" { "Min Temperature (°C)" }
                                th class="has-text-right" { "Total Precipitation (mm)" }
                                th class="has-text-right" { "Avg Humidity (%)" }
                                th class="has-text-right" { "Avg Wind Speed (km/h)" }
                            }
                        }
                        tbody {
                            @for (city, summary) in &view.summaries {
                                tr {
                                    td { strong { (city) } }
                                    td class="has-text-right" { (format!("{:.2}", summary.mean_temp_c)) }
                                    td class="has-text-right" { (format!("{:.2}", summary.max_temp_c)) }
                                    td class="has-text-right" { (format!("{:.2}", summary.min_temp_c)) }
                                    td class="has-text-right" { (format!("{:.2}", summary.total_precip_mm)) }
                                    td class="has-text-right" { (format!("{:.2}", summary.mean_humidity_pct)) }
                                    td class="has-text-right" { (format!("{:.2}", summary.mean_wind_kph)) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn current_table(reading: &CurrentReading) -> Markup {
    html! {
        div class="table-container" {
            table class="table is-fullwidth is-narrow is-striped" {
                tbody {
                    tr { th { "Observed" } td { (reading.timestamp.format(&Rfc3339).unwrap_or_default()) } }
                    tr { th { "Temperature" } td { (format!("{:.1} °C", reading.temp_c)) } }
                    tr { th { "Humidity" } td { (format!("{:.0} %", reading.humidity)) } }
                    tr { th { "Wind" } td { (format!("{:.1} km/h {}", reading.wind_kph, reading.wind_dir)) } }
                    tr { th { "Precipitation" } td { (format!("{:.1} mm", reading.precip_mm)) } }
                    tr { th { "AQI" } td { (format!("{:.0}", reading.aqi)) } }
                    tr { th { "Condition" } td { (reading.condition) } }
                    tr { th { "Recorded" } td { (reading.created_at.format(&Rfc3339).unwrap_or_default()) } }
                }
            }
        }
    }
}
