use maud::{html, Markup};
use time::format_description::well_known::Rfc3339;

use crate::db::{CurrentReading, ForecastPoint, HistoricalDay};
use crate::templates::components::{info_notice, warning_notice};
use crate::templates::layouts::{base, CurrentPage, PageConfig};

/// Raw data page data: the three tables filtered to the selected
/// cities, capped by the handler.
pub struct RawDataView {
    pub cities: Vec<String>,
    pub current: Vec<CurrentReading>,
    pub forecast: Vec<ForecastPoint>,
    pub historical: Vec<HistoricalDay>,
    pub warnings: Vec<String>,
    pub truncated: bool,
}

pub fn raw_data_page(api_base: &str, view: &RawDataView) -> Markup {
    let config = PageConfig {
        title: "Cityweather - Raw Data",
        api_base,
        current_page: CurrentPage::RawData,
    };
    base(&config, raw_data_content(view))
}

pub fn raw_data_content(view: &RawDataView) -> Markup {
    html! {
        h2 class="title is-4" { "Raw Data: " (view.cities.join(" vs ")) }

        @for warning in &view.warnings {
            (warning_notice(warning))
        }
        @if view.truncated {
            (info_notice("Tables are truncated; use the JSON API for full extracts."))
        }

        div class="box" {
            h3 class="title is-5" { "Current Observations" }
            @if view.current.is_empty() {
                (info_notice("No current rows for the selected cities."))
            } @else {
                div class="table-container" {
                    table class="table is-fullwidth is-narrow is-striped is-hoverable" {
                        thead {
                            tr {
                                th { "City" }
                                th { "Observed" }
                                th class="has-text-right" { "Temp (°C)" }
                                th class="has-text-right" { "Humidity (%)" }
                                th class="has-text-right" { "Wind (km/h)" }
                                th { "Dir" }
                                th class="has-text-right" { "Precip (mm)" }
                                th class="has-text-right" { "AQI" }
                                th { "Condition" }
                                th { "Recorded" }
                            }
                        }
                        tbody {
                            @for row in &view.current {
                                tr {
                                    td { strong { (row.city) } }
                                    td { (row.timestamp.format(&Rfc3339).unwrap_or_default()) }
                                    td class="has-text-right" { (format!("{:.1}", row.temp_c)) }
                                    td class="has-text-right" { (format!("{:.0}", row.humidity)) }
                                    td class="has-text-right" { (format!("{:.1}", row.wind_kph)) }
                                    td { (row.wind_dir) }
                                    td class="has-text-right" { (format!("{:.1}", row.precip_mm)) }
                                    td class="has-text-right" { (format!("{:.0}", row.aqi)) }
                                    td { (row.condition) }
                                    td { (row.created_at.format(&Rfc3339).unwrap_or_default()) }
                                }
                            }
                        }
                    }
                }
            }
        }

        div class="box" {
            h3 class="title is-5" { "Forecast Points" }
            @if view.forecast.is_empty() {
                (info_notice("No forecast rows for the selected cities."))
            } @else {
                div class="table-container" {
                    table class="table is-fullwidth is-narrow is-striped is-hoverable" {
                        thead {
                            tr {
                                th { "City" }
                                th { "Valid At" }
                                th class="has-text-right" { "Temp (°C)" }
                                th class="has-text-right" { "Humidity (%)" }
                                th class="has-text-right" { "Wind (km/h)" }
                                th { "Dir" }
                                th class="has-text-right" { "Precip (mm)" }
                                th class="has-text-right" { "AQI" }
                                th { "Condition" }
                            }
                        }
                        tbody {
                            @for row in &view.forecast {
                                tr {
                                    td { strong { (row.city) } }
                                    td { (row.timestamp.format(&Rfc3339).unwrap_or_default()) }
                                    td class="has-text-right" { (format!("{:.1}", row.temp_c)) }
                                    td class="has-text-right" { (format!("{:.0}", row.humidity)) }
                                    td class="has-text-right" { (format!("{:.1}", row.wind_kph)) }
                                    td { (row.wind_dir) }
                                    td class="has-text-right" { (format!("{:.1}", row.precip_mm)) }
                                    td class="has-text-right" { (format!("{:.0}", row.aqi)) }
                                    td { (row.condition) }
                                }
                            }
                        }
                    }
                }
            }
        }

        div class="box" {
            h3 class="title is-5" { "Historical Days" }
            @if view.historical.is_empty() {
                (info_notice("No historical rows for the selected cities."))
            } @else {
                div class="table-container" {
                    table class="table is-fullwidth is-narrow is-striped is-hoverable" {
                        thead {
                            tr {
                                th { "Date" }
                                th { "City" }
                                th class="has-text-right" { "Temp (°C)" }
                                th class="has-text-right" { "Precip (mm)" }
                                th class="has-text-right" { "Snow" }
                                th { "Wind Dir" }
                                th class="has-text-right" { "Wind (km/h)" }
                                th class="has-text-right" { "Humidity (%)" }
                                th class="has-text-right" { "Cloud (%)" }
                                th class="has-text-right" { "Sunshine (h)" }
                            }
                        }
                        tbody {
                            @for row in &view.historical {
                                tr {
                                    td { (row.date) }
                                    td { strong { (row.city) } }
                                    td class="has-text-right" { (format!("{:.1}", row.temperature)) }
                                    td class="has-text-right" { (format!("{:.1}", row.precipitation)) }
                                    td class="has-text-right" { (format!("{:.1}", row.snow)) }
                                    td { (row.wind_dir) }
                                    td class="has-text-right" { (format!("{:.1}", row.wind_speed)) }
                                    td class="has-text-right" { (format!("{:.0}", row.humidity)) }
                                    td class="has-text-right" { (format!("{:.0}", row.cloud_cover)) }
                                    td class="has-text-right" { (format!("{:.1}", row.sunshine_duration)) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
