mod charts;
mod navbar;
mod notice;
mod theme;

pub use charts::{bar_chart, line_chart, Series};
pub use navbar::navbar;
pub use notice::{error_notice, info_notice, warning_notice};
pub use theme::theme_toggle;
