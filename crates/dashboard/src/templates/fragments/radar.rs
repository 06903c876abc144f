use maud::{html, Markup};

use crate::compare::{RADAR_AXES, RADAR_RANGE};

const SIZE: f64 = 340.0;
const CENTER: f64 = SIZE / 2.0;
const RADIUS: f64 = 120.0;

/// Radar ("spider") comparison of the five scaled current-weather
/// metrics. The radial window is fixed at 0-100; values beyond it are
/// clipped visually at the outer ring, never clamped numerically.
pub fn radar_chart(
    city1: &str,
    values1: &[f64; 5],
    color1: &str,
    city2: &str,
    values2: &[f64; 5],
    color2: &str,
) -> Markup {
    html! {
        svg class="chart radar" viewBox=(format!("0 0 {SIZE} {SIZE}")) preserveAspectRatio="xMidYMid meet" {
            defs {
                clipPath id="radar-window" {
                    circle cx=(fmt(CENTER)) cy=(fmt(CENTER)) r=(fmt(RADIUS)) {}
                }
            }
            // Concentric reference rings at 25/50/75/100
            @for ring in 1..=4 {
                circle cx=(fmt(CENTER)) cy=(fmt(CENTER))
                    r=(fmt(RADIUS * ring as f64 / 4.0)) class="chart-grid" fill="none" {}
            }
            // Spokes and axis labels
            @for (i, axis) in RADAR_AXES.iter().enumerate() {
                @let (x, y) = point_at(i, RADAR_RANGE);
                line x1=(fmt(CENTER)) y1=(fmt(CENTER)) x2=(fmt(x)) y2=(fmt(y)) class="chart-grid" {}
                @let (lx, ly) = label_at(i);
                text x=(fmt(lx)) y=(fmt(ly)) class="chart-label" text-anchor="middle" { (axis) }
            }
            polygon points=(polygon_points(values1)) fill=(color1) fill-opacity="0.25"
                stroke=(color1) stroke-width="2" clip-path="url(#radar-window)" {}
            polygon points=(polygon_points(values2)) fill=(color2) fill-opacity="0.25"
                stroke=(color2) stroke-width="2" clip-path="url(#radar-window)" {}
            // Legend
            rect x="8" y="8" width="10" height="10" fill=(color1) {}
            text x="22" y="17" class="chart-label" text-anchor="start" { (city1) }
            rect x="8" y="26" width="10" height="10" fill=(color2) {}
            text x="22" y="35" class="chart-label" text-anchor="start" { (city2) }
        }
    }
}

/// Axis `i` runs clockwise from twelve o'clock.
fn angle(i: usize) -> f64 {
    (i as f64 * 72.0 - 90.0).to_radians()
}

fn point_at(i: usize, value: f64) -> (f64, f64) {
    let r = value / RADAR_RANGE * RADIUS;
    let a = angle(i);
    (CENTER + r * a.cos(), CENTER + r * a.sin())
}

fn label_at(i: usize) -> (f64, f64) {
    let a = angle(i);
    let r = RADIUS + 22.0;
    // Nudge labels below their anchor point so they don't sit on a spoke
    (CENTER + r * a.cos(), CENTER + r * a.sin() + 4.0)
}

fn polygon_points(values: &[f64; 5]) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let (x, y) = point_at(i, v);
            format!("{},{}", fmt(x), fmt(y))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn fmt(v: f64) -> String {
    format!("{:.1}", v)
}
