//! Aggregation engine: the per-city-pair transforms behind every tab.
//!
//! All functions are pure over in-memory snapshots; empty inputs mean
//! "section unavailable", never an error.

use itertools::{Itertools, MinMaxResult};

use crate::db::{CurrentReading, ForecastPoint, HistoricalDay};

/// Axis labels for the radar comparison chart, in render order.
pub const RADAR_AXES: [&str; 5] = [
    "Temperature",
    "Humidity",
    "Wind Speed",
    "Precipitation",
    "AQI",
];

/// Fixed presentation-scaling multipliers mapping the five current
/// metrics onto the radar's 0-100 display window. These are a visual
/// convention, not derived from data; values outside the window are
/// clipped by the chart, never clamped here.
const RADAR_SCALE: [f64; 5] = [2.0, 1.0, 2.0, 10.0, 1.0];

/// Radar display range upper bound.
pub const RADAR_RANGE: f64 = 100.0;

/// The most recent current reading for a city: greatest `created_at`
/// wins. Rows arrive ordered by `created_at` ascending; when several
/// rows share the greatest value, the last retained row wins.
pub fn latest_reading<'a>(rows: &'a [CurrentReading], city: &str) -> Option<&'a CurrentReading> {
    let mut latest: Option<&CurrentReading> = None;
    for row in rows.iter().filter(|r| r.city == city) {
        match latest {
            Some(best) if row.created_at < best.created_at => {}
            _ => latest = Some(row),
        }
    }
    latest
}

/// Forecast points for one city, order preserved. No resampling and no
/// gap-filling; the raw sequence feeds the charts directly.
pub fn forecast_for<'a>(rows: &'a [ForecastPoint], city: &str) -> Vec<&'a ForecastPoint> {
    rows.iter().filter(|p| p.city == city).collect()
}

/// Both cities' forecast sequences, or `None` when either is empty
/// (the forecast comparison is both-or-nothing).
pub fn forecast_pair<'a>(
    rows: &'a [ForecastPoint],
    city1: &str,
    city2: &str,
) -> Option<(Vec<&'a ForecastPoint>, Vec<&'a ForecastPoint>)> {
    let first = forecast_for(rows, city1);
    let second = forecast_for(rows, city2);
    if first.is_empty() || second.is_empty() {
        return None;
    }
    Some((first, second))
}

/// Historical days for one city, order preserved.
pub fn historical_for<'a>(rows: &'a [HistoricalDay], city: &str) -> Vec<&'a HistoricalDay> {
    rows.iter().filter(|d| d.city == city).collect()
}

/// The six-scalar summary row for one city's historical days.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, utoipa::ToSchema)]
pub struct HistoricalSummary {
    pub mean_temp_c: f64,
    pub total_precip_mm: f64,
    pub mean_humidity_pct: f64,
    pub mean_wind_kph: f64,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
}

/// Summary statistics over exactly the rows matching `city`.
/// An empty filter yields `None` ("unavailable"), never NaN or zero.
pub fn historical_summary(rows: &[HistoricalDay], city: &str) -> Option<HistoricalSummary> {
    let days = historical_for(rows, city);
    if days.is_empty() {
        return None;
    }
    let n = days.len() as f64;

    let (min_temp_c, max_temp_c) = match days
        .iter()
        .map(|d| d.temperature)
        .minmax_by(|a, b| a.total_cmp(b))
    {
        MinMaxResult::NoElements => return None,
        MinMaxResult::OneElement(t) => (t, t),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };

    Some(HistoricalSummary {
        mean_temp_c: days.iter().map(|d| d.temperature).sum::<f64>() / n,
        total_precip_mm: days.iter().map(|d| d.precipitation).sum(),
        mean_humidity_pct: days.iter().map(|d| d.humidity).sum::<f64>() / n,
        mean_wind_kph: days.iter().map(|d| d.wind_speed).sum::<f64>() / n,
        max_temp_c,
        min_temp_c,
    })
}

/// Signed per-metric deltas, always second minus first.
pub fn summary_delta(first: &HistoricalSummary, second: &HistoricalSummary) -> HistoricalSummary {
    HistoricalSummary {
        mean_temp_c: second.mean_temp_c - first.mean_temp_c,
        total_precip_mm: second.total_precip_mm - first.total_precip_mm,
        mean_humidity_pct: second.mean_humidity_pct - first.mean_humidity_pct,
        mean_wind_kph: second.mean_wind_kph - first.mean_wind_kph,
        max_temp_c: second.max_temp_c - first.max_temp_c,
        min_temp_c: second.min_temp_c - first.min_temp_c,
    }
}

/// One metric of the current-weather quick comparison: both values and
/// the signed delta (second minus first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDelta {
    pub label: &'static str,
    pub unit: &'static str,
    pub first: f64,
    pub second: f64,
    pub delta: f64,
}

/// Everything the current-weather comparison section renders: the two
/// scaled radar vectors and the unscaled per-metric deltas.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickComparison {
    pub radar1: [f64; 5],
    pub radar2: [f64; 5],
    pub deltas: [MetricDelta; 5],
}

pub fn quick_comparison(first: &CurrentReading, second: &CurrentReading) -> QuickComparison {
    let metric = |label, unit, a: f64, b: f64| MetricDelta {
        label,
        unit,
        first: a,
        second: b,
        delta: b - a,
    };
    QuickComparison {
        radar1: radar_values(first),
        radar2: radar_values(second),
        deltas: [
            metric("Temperature", "°C", first.temp_c, second.temp_c),
            metric("Humidity", "%", first.humidity, second.humidity),
            metric("Wind Speed", " km/h", first.wind_kph, second.wind_kph),
            metric("Precipitation", " mm", first.precip_mm, second.precip_mm),
            metric("AQI", "", first.aqi, second.aqi),
        ],
    }
}

/// The five radar values for one reading, in `RADAR_AXES` order.
pub fn radar_values(reading: &CurrentReading) -> [f64; 5] {
    [
        reading.temp_c * RADAR_SCALE[0],
        reading.humidity * RADAR_SCALE[1],
        reading.wind_kph * RADAR_SCALE[2],
        reading.precip_mm * RADAR_SCALE[3],
        reading.aqi * RADAR_SCALE[4],
    ]
}
