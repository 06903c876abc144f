pub mod dashboard;
pub mod raw_data;

pub use dashboard::{dashboard_page, no_cities_page};
pub use raw_data::raw_data_page;
