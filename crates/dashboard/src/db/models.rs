use serde::Serialize;
use sqlx::{sqlite::SqliteRow, Row};
use time::{
    format_description::{well_known::Rfc3339, BorrowedFormatItem},
    macros::format_description,
    Date, OffsetDateTime, PrimitiveDateTime,
};
use utoipa::ToSchema;

/// One observed weather snapshot for a city. Only the row with the
/// greatest `created_at` per city is shown as "current".
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CurrentReading {
    pub city: String,
    pub timestamp: OffsetDateTime,
    pub temp_c: f64,
    pub humidity: f64,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub precip_mm: f64,
    pub aqi: f64,
    pub condition: String,
    pub created_at: OffsetDateTime,
}

/// One predicted weather snapshot for a city at a future timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ForecastPoint {
    pub city: String,
    pub timestamp: OffsetDateTime,
    pub temp_c: f64,
    pub humidity: f64,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub precip_mm: f64,
    pub aqi: f64,
    pub condition: String,
}

/// One aggregated daily weather record from the climate archive.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HistoricalDay {
    pub date: Date,
    pub city: String,
    pub temperature: f64,
    pub precipitation: f64,
    pub snow: f64,
    pub wind_dir: String,
    pub wind_speed: f64,
    pub humidity: f64,
    pub cloud_cover: f64,
    pub sunshine_duration: f64,
}

/// A row that cannot populate every required field is excluded from the
/// result rather than flowing downstream as a partial record.
#[derive(thiserror::Error, Debug)]
pub(crate) enum RowError {
    #[error("column error: {0}")]
    Column(#[from] sqlx::Error),
    #[error("unparseable timestamp {0:?}")]
    Timestamp(String),
    #[error("unparseable date {0:?}")]
    Date(String),
}

const SQL_DATETIME: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const SQL_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parse a timestamp column stored as text.
///
/// The ingestion pipeline writes either RFC 3339 or the bare SQL form
/// `YYYY-MM-DD HH:MM:SS`; the latter is interpreted as UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, RowError> {
    let trimmed = raw.trim();
    if let Ok(parsed) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(parsed);
    }
    PrimitiveDateTime::parse(trimmed, SQL_DATETIME)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|_| RowError::Timestamp(raw.to_string()))
}

/// Parse a date column stored as text, ignoring any trailing time
/// component (`meteostat` dates may carry a midnight suffix).
pub(crate) fn parse_date(raw: &str) -> Result<Date, RowError> {
    let trimmed = raw.trim();
    let day = trimmed.get(..10).unwrap_or(trimmed);
    Date::parse(day, SQL_DATE).map_err(|_| RowError::Date(raw.to_string()))
}

impl CurrentReading {
    pub(crate) fn from_row(row: &SqliteRow) -> Result<Self, RowError> {
        Ok(Self {
            city: row.try_get("city")?,
            timestamp: parse_timestamp(&row.try_get::<String, _>("datetime")?)?,
            temp_c: row.try_get("temp_c")?,
            humidity: row.try_get("humidity")?,
            wind_kph: row.try_get("wind_kph")?,
            wind_dir: row.try_get("wind_dir")?,
            precip_mm: row.try_get("precip_mm")?,
            aqi: row.try_get("aqi")?,
            condition: row.try_get("condition")?,
            created_at: parse_timestamp(&row.try_get::<String, _>("created_at")?)?,
        })
    }
}

impl ForecastPoint {
    pub(crate) fn from_row(row: &SqliteRow) -> Result<Self, RowError> {
        Ok(Self {
            city: row.try_get("city")?,
            timestamp: parse_timestamp(&row.try_get::<String, _>("datetime")?)?,
            temp_c: row.try_get("temp_c")?,
            humidity: row.try_get("humidity")?,
            wind_kph: row.try_get("wind_kph")?,
            wind_dir: row.try_get("wind_dir")?,
            precip_mm: row.try_get("precip_mm")?,
            aqi: row.try_get("aqi")?,
            condition: row.try_get("condition")?,
        })
    }
}

impl HistoricalDay {
    pub(crate) fn from_row(row: &SqliteRow) -> Result<Self, RowError> {
        Ok(Self {
            date: parse_date(&row.try_get::<String, _>("date")?)?,
            city: row.try_get("city")?,
            temperature: row.try_get("temperature")?,
            precipitation: row.try_get("precipitation")?,
            snow: row.try_get("snow")?,
            wind_dir: row.try_get("wind_dir")?,
            wind_speed: row.try_get("wind_speed")?,
            humidity: row.try_get("humidity")?,
            cloud_cover: row.try_get("cloud_cover")?,
            sunshine_duration: row.try_get("sunshine_duration")?,
        })
    }
}
