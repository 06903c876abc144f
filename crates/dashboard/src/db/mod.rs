mod cache;
mod models;
mod store;

pub use cache::{CachedStore, Snapshot, SnapshotCache};
pub use models::{CurrentReading, ForecastPoint, HistoricalDay};
pub use store::{Source, SqliteStore, StoreError, WeatherStore};
