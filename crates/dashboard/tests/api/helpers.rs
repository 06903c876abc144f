use async_trait::async_trait;
use axum::Router;
use cityweather::{
    app, AppState, CachedStore, CurrentReading, ForecastPoint, HistoricalDay, Source, StoreError,
    WeatherStore,
};
use mockall::mock;
use std::{path::PathBuf, sync::Arc};
use time::{macros::datetime, Date, Duration, Month, OffsetDateTime};

mock! {
    pub WeatherStore {}

    #[async_trait]
    impl WeatherStore for WeatherStore {
        async fn fetch_current(&self) -> Result<Vec<CurrentReading>, StoreError>;
        async fn fetch_forecast(&self) -> Result<Vec<ForecastPoint>, StoreError>;
        async fn fetch_historical(&self) -> Result<Vec<HistoricalDay>, StoreError>;
        async fn distinct_cities(&self, source: Source) -> Result<Vec<String>, StoreError>;
    }
}

pub struct TestApp {
    pub app: Router,
}

pub async fn spawn_app(store: Arc<dyn WeatherStore>) -> TestApp {
    let app_state = AppState {
        static_dir: "./static".to_string(),
        remote_url: "http://localhost:8950".to_string(),
        store: Arc::new(CachedStore::new(store, Duration::hours(1))),
    };
    TestApp {
        app: app(app_state),
    }
}

pub fn missing_source_error() -> StoreError {
    StoreError::Missing(PathBuf::from("/nonexistent-cityweather/current_data.db"))
}

pub fn mock_reading(city: &str, temp_c: f64, created_at: OffsetDateTime) -> CurrentReading {
    CurrentReading {
        city: city.to_string(),
        timestamp: created_at,
        temp_c,
        humidity: 55.0,
        wind_kph: 12.0,
        wind_dir: "NW".to_string(),
        precip_mm: 0.4,
        aqi: 42.0,
        condition: "Partly cloudy".to_string(),
        created_at,
    }
}

pub fn mock_forecast_point(city: &str, temp_c: f64, hour_offset: i64) -> ForecastPoint {
    ForecastPoint {
        city: city.to_string(),
        timestamp: datetime!(2026-08-25 00:00:00 UTC) + Duration::hours(hour_offset),
        temp_c,
        humidity: 60.0,
        wind_kph: 10.0,
        wind_dir: "SE".to_string(),
        precip_mm: 1.2,
        aqi: 35.0,
        condition: "Light rain".to_string(),
    }
}

pub fn mock_historical_day(city: &str, temperature: f64, day: u8) -> HistoricalDay {
    HistoricalDay {
        date: Date::from_calendar_date(2026, Month::July, day).unwrap(),
        city: city.to_string(),
        temperature,
        precipitation: 2.5,
        snow: 0.0,
        wind_dir: "N".to_string(),
        wind_speed: 14.0,
        humidity: 65.0,
        cloud_cover: 40.0,
        sunshine_duration: 300.0,
    }
}
