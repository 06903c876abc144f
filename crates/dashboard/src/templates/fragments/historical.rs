use maud::{html, Markup};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use super::{delta_tag, CITY1_COLOR, CITY2_COLOR};
use crate::compare::HistoricalSummary;
use crate::db::HistoricalDay;
use crate::templates::components::{bar_chart, info_notice, line_chart, warning_notice, Series};

/// One city's historical days flattened into chart-ready columns.
pub struct HistorySeries {
    pub labels: Vec<String>,
    pub temperature: Vec<f64>,
    pub precipitation: Vec<f64>,
}

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

impl HistorySeries {
    pub fn from_days(days: &[&HistoricalDay]) -> Self {
        Self {
            labels: days
                .iter()
                .map(|d| d.date.format(DATE_FORMAT).unwrap_or_default())
                .collect(),
            temperature: days.iter().map(|d| d.temperature).collect(),
            precipitation: days.iter().map(|d| d.precipitation).collect(),
        }
    }
}

/// Both cities' summaries, their deltas, and the trend series. Present
/// only when both cities have historical rows.
pub struct HistoricalComparison {
    pub summary1: HistoricalSummary,
    pub summary2: HistoricalSummary,
    pub delta: HistoricalSummary,
    pub series1: HistorySeries,
    pub series2: HistorySeries,
}

pub struct HistoricalView {
    pub city1: String,
    pub city2: String,
    pub comparison: Option<HistoricalComparison>,
    pub source_failed: bool,
}

pub fn historical_content(view: &HistoricalView) -> Markup {
    html! {
        h2 class="title is-4" { "Historical Weather Analysis: " (view.city1) " vs " (view.city2) }

        @if view.source_failed {
            (warning_notice("The historical database is unavailable; showing nothing for this tab."))
        } @else {
            @if let Some(comparison) = &view.comparison {
                h3 class="title is-5" { "Period Averages" }
                div class="columns" {
                    (summary_column("Avg Temp", "°C", view, comparison.summary1.mean_temp_c,
                        comparison.summary2.mean_temp_c, comparison.delta.mean_temp_c))
                    (summary_column("Total Precip", " mm", view, comparison.summary1.total_precip_mm,
                        comparison.summary2.total_precip_mm, comparison.delta.total_precip_mm))
                    (summary_column("Avg Humidity", "%", view, comparison.summary1.mean_humidity_pct,
                        comparison.summary2.mean_humidity_pct, comparison.delta.mean_humidity_pct))
                    (summary_column("Avg Wind", " km/h", view, comparison.summary1.mean_wind_kph,
                        comparison.summary2.mean_wind_kph, comparison.delta.mean_wind_kph))
                }

                @let temp_series = [
                    Series { name: &view.city1, color: CITY1_COLOR,
                        labels: &comparison.series1.labels, values: &comparison.series1.temperature },
                    Series { name: &view.city2, color: CITY2_COLOR,
                        labels: &comparison.series2.labels, values: &comparison.series2.temperature },
                ];
                @let precip_series = [
                    Series { name: &view.city1, color: CITY1_COLOR,
                        labels: &comparison.series1.labels, values: &comparison.series1.precipitation },
                    Series { name: &view.city2, color: CITY2_COLOR,
                        labels: &comparison.series2.labels, values: &comparison.series2.precipitation },
                ];

                div class="box" {
                    h3 class="title is-5" { "Temperature Trend" }
                    (line_chart(&temp_series, "°C"))
                }
                div class="box" {
                    h3 class="title is-5" { "Precipitation Comparison" }
                    (bar_chart(&precip_series, " mm"))
                }
            } @else {
                (info_notice("Insufficient historical data for comparison"))
            }
        }
    }
}

fn summary_column(
    label: &str,
    unit: &str,
    view: &HistoricalView,
    first: f64,
    second: f64,
    delta: f64,
) -> Markup {
    html! {
        div class="column" {
            div class="box" {
                p class="heading" { (label) }
                p class="title is-6 mb-1" { (view.city1) ": " (format!("{:.1}{}", first, unit)) }
                p class="title is-6 mb-2" { (view.city2) ": " (format!("{:.1}{}", second, unit)) }
                (delta_tag(delta, unit))
            }
        }
    }
}
