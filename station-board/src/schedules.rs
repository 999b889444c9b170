//! Loaded station schedules.
//!
//! Each station's schedule is held as an immutable snapshot. A reload swaps
//! in a whole new snapshot with a fresh version number; readers holding the
//! old one are unaffected.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::domain::{ScheduleEntry, Timestamp};
use crate::feed::{FeedError, FileFeed, StationKey, window_dates};

/// One station's schedule at one version.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Distinguishes this snapshot from every other one in the store.
    pub version: u64,
    pub entries: Arc<Vec<Arc<ScheduleEntry>>>,
}

/// Thread-safe schedule lookup with background refresh.
#[derive(Clone)]
pub struct ScheduleStore {
    inner: Arc<RwLock<HashMap<StationKey, Snapshot>>>,
    next_version: Arc<AtomicU64>,
    feed: FileFeed,
}

impl ScheduleStore {
    pub fn new(feed: FileFeed) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            next_version: Arc::new(AtomicU64::new(1)),
            feed,
        }
    }

    /// The current snapshot for a station, if loaded.
    pub async fn get(&self, key: &StationKey) -> Option<Snapshot> {
        let guard = self.inner.read().await;
        guard.get(key).cloned()
    }

    /// Number of loaded stations.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    /// Install a new schedule for a station.
    pub async fn replace(&self, key: StationKey, entries: Vec<ScheduleEntry>) -> Snapshot {
        let snapshot = Snapshot {
            version: self.next_version.fetch_add(1, Ordering::Relaxed),
            entries: Arc::new(entries.into_iter().map(Arc::new).collect()),
        };

        let mut guard = self.inner.write().await;
        guard.insert(key, snapshot.clone());
        snapshot
    }

    /// Load a station's schedule for the days around `now` from the feed.
    ///
    /// On failure the existing snapshot, if any, is kept.
    pub async fn load(&self, key: &StationKey, now: Timestamp) -> Result<Snapshot, FeedError> {
        let feed = self.feed.clone();
        let station = key.clone();
        let dates = window_dates(now, &key.country);
        let entries =
            tokio::task::spawn_blocking(move || feed.load_station(&station, &dates)).await??;

        let snapshot = self.replace(key.clone(), entries).await;
        tracing::debug!(station = %key, version = snapshot.version, "schedule loaded");
        Ok(snapshot)
    }

    /// The current snapshot, loading it from the feed on first use.
    pub async fn get_or_load(
        &self,
        key: &StationKey,
        now: Timestamp,
    ) -> Result<Snapshot, FeedError> {
        if let Some(snapshot) = self.get(key).await {
            return Ok(snapshot);
        }
        self.load(key, now).await
    }

    /// Reload every station the feed knows about.
    ///
    /// Stations that fail to load keep their previous snapshot. Returns the
    /// number of stations reloaded; fails only if the feed can't be listed.
    pub async fn refresh(&self, now: Timestamp) -> Result<usize, FeedError> {
        let feed = self.feed.clone();
        let stations = tokio::task::spawn_blocking(move || feed.stations()).await??;

        let mut count = 0;
        for key in stations {
            match self.load(&key, now).await {
                Ok(_) => count += 1,
                Err(e) => tracing::warn!(station = %key, error = %e, "keeping previous schedule"),
            }
        }
        Ok(count)
    }
}
