use log::{info, warn};
use std::future::Future;
use std::sync::Arc;
use time::{Duration, OffsetDateTime};
use tokio::sync::RwLock;

use super::models::{CurrentReading, ForecastPoint, HistoricalDay};
use super::store::{Source, StoreError, WeatherStore};

/// An immutable table snapshot with its load time.
///
/// Snapshots are shared as `Arc`s; every caller within the TTL window
/// observes the identical loaded result.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub rows: Arc<Vec<T>>,
    pub loaded_at: OffsetDateTime,
}

impl<T> Snapshot<T> {
    pub fn is_expired(&self, now: OffsetDateTime, ttl: Duration) -> bool {
        now - self.loaded_at >= ttl
    }
}

/// One cache slot per source, plus the derived city list.
pub struct SnapshotCache {
    ttl: Duration,
    current: RwLock<Option<Snapshot<CurrentReading>>>,
    forecast: RwLock<Option<Snapshot<ForecastPoint>>>,
    historical: RwLock<Option<Snapshot<HistoricalDay>>>,
    cities: RwLock<Option<Snapshot<String>>>,
}

impl SnapshotCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            current: RwLock::new(None),
            forecast: RwLock::new(None),
            historical: RwLock::new(None),
            cities: RwLock::new(None),
        }
    }
}

/// A `WeatherStore` front that memoizes full-table reads for a fixed
/// time-to-live. Failed loads are never cached, so the next caller
/// retries the source.
pub struct CachedStore {
    store: Arc<dyn WeatherStore>,
    cache: SnapshotCache,
}

impl CachedStore {
    pub fn new(store: Arc<dyn WeatherStore>, ttl: Duration) -> Self {
        Self {
            store,
            cache: SnapshotCache::new(ttl),
        }
    }

    pub async fn current(&self) -> Result<Arc<Vec<CurrentReading>>, StoreError> {
        cached(&self.cache.current, self.cache.ttl, Source::Current, || {
            self.store.fetch_current()
        })
        .await
    }

    pub async fn forecast(&self) -> Result<Arc<Vec<ForecastPoint>>, StoreError> {
        cached(
            &self.cache.forecast,
            self.cache.ttl,
            Source::Forecast,
            || self.store.fetch_forecast(),
        )
        .await
    }

    pub async fn historical(&self) -> Result<Arc<Vec<HistoricalDay>>, StoreError> {
        cached(
            &self.cache.historical,
            self.cache.ttl,
            Source::Historical,
            || self.store.fetch_historical(),
        )
        .await
    }

    /// Union of distinct city identifiers across all three sources,
    /// sorted and deduplicated. A source that fails to read contributes
    /// nothing beyond a warning.
    pub async fn cities(&self) -> Arc<Vec<String>> {
        let now = OffsetDateTime::now_utc();
        if let Some(snap) = self.cache.cities.read().await.as_ref() {
            if !snap.is_expired(now, self.cache.ttl) {
                return snap.rows.clone();
            }
        }

        let mut guard = self.cache.cities.write().await;
        if let Some(snap) = guard.as_ref() {
            if !snap.is_expired(now, self.cache.ttl) {
                return snap.rows.clone();
            }
        }

        let mut merged: Vec<String> = Vec::new();
        for source in Source::ALL {
            match self.store.distinct_cities(source).await {
                Ok(mut list) => merged.append(&mut list),
                Err(e) => warn!("could not load cities from {} database: {}", source, e),
            }
        }
        merged.sort();
        merged.dedup();

        let rows = Arc::new(merged);
        *guard = Some(Snapshot {
            rows: rows.clone(),
            loaded_at: now,
        });
        rows
    }
}

async fn cached<T, F, Fut>(
    slot: &RwLock<Option<Snapshot<T>>>,
    ttl: Duration,
    source: Source,
    load: F,
) -> Result<Arc<Vec<T>>, StoreError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>, StoreError>>,
{
    let now = OffsetDateTime::now_utc();
    if let Some(snap) = slot.read().await.as_ref() {
        if !snap.is_expired(now, ttl) {
            return Ok(snap.rows.clone());
        }
    }

    // Re-check under the write lock; another task may have reloaded.
    let mut guard = slot.write().await;
    if let Some(snap) = guard.as_ref() {
        if !snap.is_expired(now, ttl) {
            return Ok(snap.rows.clone());
        }
    }

    let rows = Arc::new(load().await?);
    info!("loaded {} rows from the {} database", rows.len(), source);
    *guard = Some(Snapshot {
        rows: rows.clone(),
        loaded_at: now,
    });
    Ok(rows)
}
