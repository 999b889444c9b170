//! Schedule feed error types.

use std::path::PathBuf;

/// Errors that can occur when loading station schedules.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Reading a schedule file or directory failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A schedule file is not a JSON array
    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No schedules exist for the station
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// The country or station code is not usable as a key
    #[error("invalid station code: {0:?}")]
    InvalidStation(String),

    /// The blocking task reading the schedule files did not complete
    #[error("schedule loading task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
