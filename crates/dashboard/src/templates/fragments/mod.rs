mod current;
mod forecast;
mod historical;
mod metrics;
mod radar;

pub use current::{current_content, CurrentComparison};
pub use forecast::{forecast_content, ForecastSeries, ForecastView};
pub use historical::{historical_content, HistoricalComparison, HistoricalView, HistorySeries};
pub use metrics::{metrics_content, MetricsView};
pub use radar::radar_chart;

use maud::{html, Markup};

/// Plot color for the first selected city.
pub const CITY1_COLOR: &str = "#ff6b6b";
/// Plot color for the second selected city.
pub const CITY2_COLOR: &str = "#4ecdc4";

/// Signed delta tag: green for positive, red for negative, grey for
/// zero. The sign convention is always second city minus first.
pub(crate) fn delta_tag(delta: f64, unit: &str) -> Markup {
    let class = if delta > 0.0 {
        "tag is-success is-light"
    } else if delta < 0.0 {
        "tag is-danger is-light"
    } else {
        "tag is-light"
    };
    html! {
        span class=(class) { (format!("{:+.1}{}", delta, unit)) }
    }
}
