//! Memoization of computed boards.
//!
//! A board is a pure function of the schedule snapshot and the quantized
//! "now", so it is cached under `(station, now, schedule version)`. A new
//! schedule version or a tick of "now" simply misses and recomputes; stale
//! keys age out through the TTL.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::board::{Board, BoardConfig, NowReference};
use crate::feed::StationKey;
use crate::schedules::Snapshot;

/// Cache key for boards: (station, now, schedule version).
type BoardKey = (StationKey, NowReference, u64);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached boards.
    pub ttl: Duration,

    /// Maximum number of cached boards.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(120),
            max_capacity: 1000,
        }
    }
}

/// Cache of computed boards.
pub struct BoardCache {
    boards: MokaCache<BoardKey, Arc<Board>>,
}

impl BoardCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let boards = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { boards }
    }

    /// Return the cached board for this station, instant and snapshot, or
    /// compute and cache it.
    ///
    /// Concurrent misses may both compute; the later insert wins. Both
    /// results are identical, so it doesn't matter which one is kept.
    pub async fn get_or_compute(
        &self,
        station: &StationKey,
        now: NowReference,
        snapshot: &Snapshot,
        config: &BoardConfig,
    ) -> Arc<Board> {
        let key = (station.clone(), now, snapshot.version);

        if let Some(cached) = self.boards.get(&key).await {
            tracing::trace!(%station, version = snapshot.version, "board cache hit");
            return cached;
        }

        let board = Arc::new(Board::compute(&snapshot.entries, now, config));
        self.boards.insert(key, Arc::clone(&board)).await;

        board
    }
}
