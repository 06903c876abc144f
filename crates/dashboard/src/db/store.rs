use async_trait::async_trait;
use log::debug;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::path::{Path, PathBuf};

use super::models::{CurrentReading, ForecastPoint, HistoricalDay};

/// The three independent read-only data sources written by the external
/// ingestion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Current,
    Forecast,
    Historical,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Current, Source::Forecast, Source::Historical];

    /// Database file name, matching what the ingestion pipeline writes.
    pub fn file_name(&self) -> &'static str {
        match self {
            Source::Current => "current_data.db",
            Source::Forecast => "forecast_data.db",
            Source::Historical => "meteostat_data.db",
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            Source::Current => "current",
            Source::Forecast => "forecast",
            Source::Historical => "meteostat",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Current => "current",
            Source::Forecast => "forecast",
            Source::Historical => "historical",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("database file not found: {0}")]
    Missing(PathBuf),
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Read-only access to the three weather databases.
///
/// Every method returns all matching rows under a fixed query; an empty
/// table is `Ok(vec![])`, a missing or unreadable source is an `Err` the
/// caller degrades to "empty plus warning".
#[async_trait]
pub trait WeatherStore: Send + Sync {
    async fn fetch_current(&self) -> Result<Vec<CurrentReading>, StoreError>;
    async fn fetch_forecast(&self) -> Result<Vec<ForecastPoint>, StoreError>;
    async fn fetch_historical(&self) -> Result<Vec<HistoricalDay>, StoreError>;
    /// Distinct city identifiers present in one source.
    async fn distinct_cities(&self, source: Source) -> Result<Vec<String>, StoreError>;
}

/// `WeatherStore` over three SQLite files in a shared data directory.
///
/// Connections are opened per call rather than pooled for the process
/// lifetime so databases that appear after startup are picked up; the
/// snapshot cache keeps the reconnect cost to once per TTL window.
pub struct SqliteStore {
    data_dir: PathBuf,
}

impl SqliteStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn db_path(&self, source: Source) -> PathBuf {
        self.data_dir.join(source.file_name())
    }

    async fn connect(&self, source: Source) -> Result<SqlitePool, StoreError> {
        let path = self.db_path(source);
        if !Path::exists(&path) {
            return Err(StoreError::Missing(path));
        }
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .read_only(true)
            .pragma("busy_timeout", "5000");
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        Ok(pool)
    }
}

#[async_trait]
impl WeatherStore for SqliteStore {
    async fn fetch_current(&self) -> Result<Vec<CurrentReading>, StoreError> {
        let pool = self.connect(Source::Current).await?;
        let rows = sqlx::query(
            "SELECT city, datetime, temp_c, humidity, wind_kph, wind_dir, \
             precip_mm, aqi, condition, created_at \
             FROM current ORDER BY created_at",
        )
        .fetch_all(&pool)
        .await?;
        pool.close().await;

        Ok(rows
            .iter()
            .filter_map(|row| match CurrentReading::from_row(row) {
                Ok(reading) => Some(reading),
                Err(e) => {
                    debug!("skipping malformed current row: {}", e);
                    None
                }
            })
            .collect())
    }

    async fn fetch_forecast(&self) -> Result<Vec<ForecastPoint>, StoreError> {
        let pool = self.connect(Source::Forecast).await?;
        let rows = sqlx::query(
            "SELECT city, datetime, temp_c, humidity, wind_kph, wind_dir, \
             precip_mm, aqi, condition \
             FROM forecast ORDER BY datetime",
        )
        .fetch_all(&pool)
        .await?;
        pool.close().await;

        Ok(rows
            .iter()
            .filter_map(|row| match ForecastPoint::from_row(row) {
                Ok(point) => Some(point),
                Err(e) => {
                    debug!("skipping malformed forecast row: {}", e);
                    None
                }
            })
            .collect())
    }

    async fn fetch_historical(&self) -> Result<Vec<HistoricalDay>, StoreError> {
        let pool = self.connect(Source::Historical).await?;
        let rows = sqlx::query(
            "SELECT date, city, temperature, precipitation, snow, \
             wind_dir, wind_speed, humidity, cloud_cover, sunshine_duration \
             FROM meteostat ORDER BY date",
        )
        .fetch_all(&pool)
        .await?;
        pool.close().await;

        Ok(rows
            .iter()
            .filter_map(|row| match HistoricalDay::from_row(row) {
                Ok(day) => Some(day),
                Err(e) => {
                    debug!("skipping malformed historical row: {}", e);
                    None
                }
            })
            .collect())
    }

    async fn distinct_cities(&self, source: Source) -> Result<Vec<String>, StoreError> {
        let pool = self.connect(source).await?;
        let query = format!("SELECT DISTINCT city FROM {}", source.table());
        let rows = sqlx::query(&query).fetch_all(&pool).await?;
        pool.close().await;

        Ok(rows
            .iter()
            .filter_map(|row| row.try_get::<Option<String>, _>("city").ok().flatten())
            .collect())
    }
}
