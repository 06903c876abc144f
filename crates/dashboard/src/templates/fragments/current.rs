use maud::{html, Markup};
use time::format_description::well_known::Rfc3339;

use super::{delta_tag, radar_chart, CITY1_COLOR, CITY2_COLOR};
use crate::compare::QuickComparison;
use crate::db::CurrentReading;
use crate::templates::components::{info_notice, warning_notice};

/// Everything the current-weather tab renders.
pub struct CurrentComparison {
    pub city1: String,
    pub city2: String,
    pub reading1: Option<CurrentReading>,
    pub reading2: Option<CurrentReading>,
    /// Present only when both cities have a current reading.
    pub comparison: Option<QuickComparison>,
    pub source_failed: bool,
}

pub fn current_content(view: &CurrentComparison) -> Markup {
    html! {
        h2 class="title is-4" { "Current Weather: " (view.city1) " vs " (view.city2) }

        @if view.source_failed {
            (warning_notice("The current weather database is unavailable; showing nothing for this tab."))
        } @else if view.reading1.is_none() && view.reading2.is_none() {
            (info_notice("No current weather data available."))
        }

        div class="columns" {
            div class="column is-half" {
                @if let Some(reading) = &view.reading1 {
                    (weather_card(&view.city1, reading))
                } @else if !view.source_failed {
                    (warning_notice(&format!("No current data for {}", view.city1)))
                }
            }
            div class="column is-half" {
                @if let Some(reading) = &view.reading2 {
                    (weather_card(&view.city2, reading))
                } @else if !view.source_failed {
                    (warning_notice(&format!("No current data for {}", view.city2)))
                }
            }
        }

        @if let Some(comparison) = &view.comparison {
            hr;
            h3 class="title is-5" { "Quick Comparison" }
            div class="columns" {
                div class="column is-half" {
                    (radar_chart(
                        &view.city1, &comparison.radar1, CITY1_COLOR,
                        &view.city2, &comparison.radar2, CITY2_COLOR,
                    ))
                }
                div class="column is-half" {
                    table class="table is-fullwidth is-striped" {
                        thead {
                            tr {
                                th { "Metric" }
                                th class="has-text-right" { (view.city1) }
                                th class="has-text-right" { (view.city2) }
                                th class="has-text-right" { "Delta" }
                            }
                        }
                        tbody {
                            @for metric in &comparison.deltas {
                                tr {
                                    td { (metric.label) }
                                    td class="has-text-right" { (format!("{:.1}{}", metric.first, metric.unit)) }
                                    td class="has-text-right" { (format!("{:.1}{}", metric.second, metric.unit)) }
                                    td class="has-text-right" { (delta_tag(metric.delta, metric.unit)) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Metric card for one city's latest reading.
fn weather_card(city: &str, reading: &CurrentReading) -> Markup {
    html! {
        div class="box" {
            h3 class="title is-5" { (city) }
            div class="columns is-mobile" {
                div class="column" {
                    (metric("Temperature", format!("{:.1}°C", reading.temp_c)))
                    (metric("Humidity", format!("{:.0}%", reading.humidity)))
                }
                div class="column" {
                    (metric("Wind Speed", format!("{:.1} km/h", reading.wind_kph)))
                    (metric("Precipitation", format!("{:.1} mm", reading.precip_mm)))
                }
                div class="column" {
                    (metric("AQI", format!("{:.0}", reading.aqi)))
                    div class="notification is-info is-light py-2 px-3" { (reading.condition) }
                }
            }
            p class="is-size-7 has-text-grey" {
                "Last updated: "
                (reading.timestamp.format(&Rfc3339).unwrap_or_default())
            }
        }
    }
}

fn metric(label: &str, value: String) -> Markup {
    html! {
        div class="mb-3" {
            p class="heading mb-0" { (label) }
            p class="title is-5 mb-1" { (value) }
        }
    }
}
