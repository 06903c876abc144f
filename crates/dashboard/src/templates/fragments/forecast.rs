use maud::{html, Markup};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use super::{CITY1_COLOR, CITY2_COLOR};
use crate::db::ForecastPoint;
use crate::templates::components::{bar_chart, info_notice, line_chart, warning_notice, Series};

/// One city's forecast window flattened into chart-ready columns.
pub struct ForecastSeries {
    pub labels: Vec<String>,
    pub temp_c: Vec<f64>,
    pub humidity: Vec<f64>,
    pub precip_mm: Vec<f64>,
}

const LABEL_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[month]-[day] [hour]:[minute]");

impl ForecastSeries {
    pub fn from_points(points: &[&ForecastPoint]) -> Self {
        Self {
            labels: points
                .iter()
                .map(|p| p.timestamp.format(LABEL_FORMAT).unwrap_or_default())
                .collect(),
            temp_c: points.iter().map(|p| p.temp_c).collect(),
            humidity: points.iter().map(|p| p.humidity).collect(),
            precip_mm: points.iter().map(|p| p.precip_mm).collect(),
        }
    }
}

/// Everything the forecast tab renders. `pair` is `None` when either
/// city has no forecast rows (both-or-nothing).
pub struct ForecastView {
    pub city1: String,
    pub city2: String,
    pub pair: Option<(ForecastSeries, ForecastSeries)>,
    pub source_failed: bool,
}

pub fn forecast_content(view: &ForecastView) -> Markup {
    html! {
        h2 class="title is-4" { "Weather Forecast: " (view.city1) " vs " (view.city2) }

        @if view.source_failed {
            (warning_notice("The forecast database is unavailable; showing nothing for this tab."))
        } @else {
            @if let Some((first, second)) = &view.pair {
            @let temp_series = [
                series(&view.city1, CITY1_COLOR, &first.labels, &first.temp_c),
                series(&view.city2, CITY2_COLOR, &second.labels, &second.temp_c),
            ];
            @let precip_series = [
                series(&view.city1, CITY1_COLOR, &first.labels, &first.precip_mm),
                series(&view.city2, CITY2_COLOR, &second.labels, &second.precip_mm),
            ];
            @let humidity_series = [
                series(&view.city1, CITY1_COLOR, &first.labels, &first.humidity),
                series(&view.city2, CITY2_COLOR, &second.labels, &second.humidity),
            ];

            div class="box" {
                h3 class="title is-5" { "Temperature Forecast" }
                (line_chart(&temp_series, "°C"))
            }
            div class="columns" {
                div class="column is-half" {
                    div class="box" {
                        h3 class="title is-5" { "Precipitation Forecast" }
                        (bar_chart(&precip_series, " mm"))
                    }
                }
                div class="column is-half" {
                    div class="box" {
                        h3 class="title is-5" { "Humidity Forecast" }
                        (line_chart(&humidity_series, "%"))
                    }
                }
            }
            } @else {
                (info_notice("Insufficient forecast data for comparison"))
            }
        }
    }
}

fn series<'a>(
    name: &'a str,
    color: &'static str,
    labels: &'a [String],
    values: &'a [f64],
) -> Series<'a> {
    Series {
        name,
        color,
        labels,
        values,
    }
}
