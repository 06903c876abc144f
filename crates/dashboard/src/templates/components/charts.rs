//! Inline SVG charts.
//!
//! Keeps rendering server-side like the rest of the UI; no client
//! charting library. Coordinates are computed here, styling lives in
//! the stylesheet.

use maud::{html, Markup};

/// One plotted series: a name for the legend, a stroke/fill color and
/// the y values with their x labels.
pub struct Series<'a> {
    pub name: &'a str,
    pub color: &'static str,
    pub labels: &'a [String],
    pub values: &'a [f64],
}

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const LEFT: f64 = 48.0;
const RIGHT: f64 = 588.0;
const TOP: f64 = 22.0;
const BOTTOM: f64 = 228.0;

/// Multi-series line chart with point markers.
pub fn line_chart(series: &[Series], unit: &str) -> Markup {
    let (lo, hi) = value_bounds(series, false);
    html! {
        svg class="chart" viewBox=(format!("0 0 {WIDTH} {HEIGHT}")) preserveAspectRatio="xMidYMid meet" {
            (grid(lo, hi, unit))
            @for s in series {
                polyline class="chart-line" fill="none" stroke=(s.color) stroke-width="2.5"
                    points=(polyline_points(s.values, lo, hi)) {}
                @for (i, &v) in s.values.iter().enumerate() {
                    circle cx=(fmt(x_at(i, s.values.len()))) cy=(fmt(y_at(v, lo, hi))) r="2.5" fill=(s.color) {}
                }
            }
            (x_labels(series))
            (legend(series))
        }
    }
}

/// Grouped bar chart; the value axis always includes zero.
pub fn bar_chart(series: &[Series], unit: &str) -> Markup {
    let (lo, hi) = value_bounds(series, true);
    let slots = series.iter().map(|s| s.values.len()).max().unwrap_or(0);
    let slot_width = if slots > 0 {
        (RIGHT - LEFT) / slots as f64
    } else {
        0.0
    };
    let bar_width = (slot_width * 0.8 / series.len().max(1) as f64).min(18.0);
    let baseline = y_at(0.0, lo, hi);

    html! {
        svg class="chart" viewBox=(format!("0 0 {WIDTH} {HEIGHT}")) preserveAspectRatio="xMidYMid meet" {
            (grid(lo, hi, unit))
            @for (si, s) in series.iter().enumerate() {
                @for (i, &v) in s.values.iter().enumerate() {
                    @let group_left = LEFT + i as f64 * slot_width + slot_width * 0.1;
                    @let x = group_left + si as f64 * bar_width;
                    @let top = y_at(v.max(0.0), lo, hi);
                    @let bottom = y_at(v.min(0.0), lo, hi);
                    rect x=(fmt(x)) y=(fmt(top)) width=(fmt(bar_width))
                        height=(fmt((bottom - top).max(0.5))) fill=(s.color) fill-opacity="0.85" {}
                }
            }
            line x1=(fmt(LEFT)) y1=(fmt(baseline)) x2=(fmt(RIGHT)) y2=(fmt(baseline))
                class="chart-axis" {}
            (x_labels(series))
            (legend(series))
        }
    }
}

fn grid(lo: f64, hi: f64, unit: &str) -> Markup {
    html! {
        @for tick in 0..=4 {
            @let value = lo + (hi - lo) * tick as f64 / 4.0;
            @let y = y_at(value, lo, hi);
            line x1=(fmt(LEFT)) y1=(fmt(y)) x2=(fmt(RIGHT)) y2=(fmt(y)) class="chart-grid" {}
            text x=(fmt(LEFT - 6.0)) y=(fmt(y + 4.0)) class="chart-label" text-anchor="end" {
                (format!("{:.1}{}", value, unit))
            }
        }
    }
}

/// First and last x labels of the densest series; intermediate labels
/// would overlap at forecast resolution.
fn x_labels(series: &[Series]) -> Markup {
    let labels = series
        .iter()
        .max_by_key(|s| s.labels.len())
        .map(|s| s.labels)
        .unwrap_or(&[]);
    html! {
        @if let Some(first) = labels.first() {
            text x=(fmt(LEFT)) y=(fmt(BOTTOM + 18.0)) class="chart-label" text-anchor="start" {
                (first)
            }
        }
        @if labels.len() > 1 {
            @if let Some(last) = labels.last() {
                text x=(fmt(RIGHT)) y=(fmt(BOTTOM + 18.0)) class="chart-label" text-anchor="end" {
                    (last)
                }
            }
        }
    }
}

fn legend(series: &[Series]) -> Markup {
    html! {
        @for (i, s) in series.iter().enumerate() {
            @let x = LEFT + i as f64 * 160.0;
            rect x=(fmt(x)) y="4" width="10" height="10" fill=(s.color) {}
            text x=(fmt(x + 14.0)) y="13" class="chart-label" text-anchor="start" { (s.name) }
        }
    }
}

fn polyline_points(values: &[f64], lo: f64, hi: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| format!("{},{}", fmt(x_at(i, values.len())), fmt(y_at(v, lo, hi))))
        .collect::<Vec<_>>()
        .join(" ")
}

fn value_bounds(series: &[Series], include_zero: bool) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for s in series {
        for &v in s.values {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if include_zero {
        lo = lo.min(0.0);
    }
    if (hi - lo).abs() < f64::EPSILON {
        hi = lo + 1.0;
    }
    let pad = (hi - lo) * 0.08;
    let lo = if include_zero && lo == 0.0 { lo } else { lo - pad };
    (lo, hi + pad)
}

fn x_at(i: usize, len: usize) -> f64 {
    if len <= 1 {
        return (LEFT + RIGHT) / 2.0;
    }
    LEFT + (RIGHT - LEFT) * i as f64 / (len - 1) as f64
}

fn y_at(v: f64, lo: f64, hi: f64) -> f64 {
    BOTTOM - (BOTTOM - TOP) * (v - lo) / (hi - lo)
}

fn fmt(v: f64) -> String {
    format!("{:.1}", v)
}
