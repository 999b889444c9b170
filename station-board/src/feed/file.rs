//! Schedule feed backed by JSON files on disk.
//!
//! Expects one file per station and operating day:
//! `<root>/<country>/<STATION>/<YYYY-MM-DD>.json`, each holding a JSON array
//! of station train records.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::domain::ScheduleEntry;

use super::convert::{combine_days, convert_schedule};
use super::error::FeedError;
use super::station::StationKey;
use super::types::StationTrainDto;

/// Reads station schedules from a data directory.
#[derive(Debug, Clone)]
pub struct FileFeed {
    root: PathBuf,
}

impl FileFeed {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn station_dir(&self, key: &StationKey) -> PathBuf {
        self.root.join(&key.country).join(&key.station)
    }

    /// Load and combine a station's schedules for the given days.
    ///
    /// Days without a file contribute nothing, and records that don't match
    /// the expected shape are skipped. Fails if the station has no
    /// directory at all, or if an existing file can't be read or isn't a
    /// JSON array.
    pub fn load_station(
        &self,
        key: &StationKey,
        dates: &[NaiveDate],
    ) -> Result<Vec<ScheduleEntry>, FeedError> {
        let dir = self.station_dir(key);
        if !dir.is_dir() {
            return Err(FeedError::UnknownStation(key.to_string()));
        }

        let mut days = Vec::with_capacity(dates.len());
        for date in dates {
            let path = dir.join(format!("{}.json", date.format("%Y-%m-%d")));
            if !path.is_file() {
                tracing::debug!(station = %key, %date, "no schedule file for day");
                continue;
            }
            days.push(convert_schedule(&read_day(&path)?));
        }

        let entries = combine_days(days);
        tracing::debug!(station = %key, entries = entries.len(), "loaded station schedule");
        Ok(entries)
    }

    /// All stations with a schedule directory.
    pub fn stations(&self) -> Result<Vec<StationKey>, FeedError> {
        let mut keys = Vec::new();

        for country in subdirs(&self.root)? {
            for station in subdirs(&country)? {
                let (Some(c), Some(s)) = (dir_name(&country), dir_name(&station)) else {
                    continue;
                };
                match StationKey::new(c, s) {
                    Ok(key) => keys.push(key),
                    Err(e) => tracing::warn!(
                        path = %station.display(),
                        error = %e,
                        "skipping station directory"
                    ),
                }
            }
        }

        keys.sort();
        Ok(keys)
    }
}

fn read_day(path: &Path) -> Result<Vec<StationTrainDto>, FeedError> {
    let json = std::fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<serde_json::Value> =
        serde_json::from_str(&json).map_err(|source| FeedError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut dtos = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<StationTrainDto>(record) {
            Ok(dto) => dtos.push(dto),
            Err(e) => tracing::warn!(
                path = %path.display(),
                index,
                error = %e,
                "skipping unreadable schedule record"
            ),
        }
    }
    Ok(dtos)
}

fn subdirs(dir: &Path) -> Result<Vec<PathBuf>, FeedError> {
    let io_err = |source: std::io::Error| FeedError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    Ok(dirs)
}

fn dir_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|s| s.to_str())
}
