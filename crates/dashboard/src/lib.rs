pub mod compare;
pub mod db;
pub mod registry;
pub mod routes;
pub mod startup;
pub mod templates;
pub mod utils;

pub use db::{
    CachedStore, CurrentReading, ForecastPoint, HistoricalDay, Source, SqliteStore, StoreError,
    WeatherStore,
};
pub use startup::{app, build_app_state, AppState};
pub use utils::{create_folder, get_config_info, get_log_level, setup_logger, Cli};
