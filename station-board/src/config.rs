//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::board::BoardConfig;
use crate::cache::CacheConfig;

/// Errors in configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value can't be used
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (`BOARD_ADDR`).
    pub addr: SocketAddr,

    /// Root of the schedule files (`BOARD_DATA_DIR`).
    pub data_dir: PathBuf,

    /// How often schedules are reloaded from disk (`BOARD_FEED_RELOAD_SECS`).
    pub feed_reload_interval: Duration,

    /// Board parameters (`BOARD_SIZE`, `BOARD_LATE_MINS`, `BOARD_REFRESH_SECS`).
    pub board: BoardConfig,

    pub cache: CacheConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_dir: PathBuf::from("data"),
            feed_reload_interval: Duration::from_secs(300),
            board: BoardConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(addr) = parse_var(&lookup, "BOARD_ADDR")? {
            config.addr = addr;
        }
        if let Some(dir) = lookup("BOARD_DATA_DIR").filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(secs) = parse_var(&lookup, "BOARD_FEED_RELOAD_SECS")? {
            config.feed_reload_interval = positive_secs("BOARD_FEED_RELOAD_SECS", secs)?;
        }
        if let Some(secs) = parse_var(&lookup, "BOARD_REFRESH_SECS")? {
            config.board.refresh_interval = positive_secs("BOARD_REFRESH_SECS", secs)?;
        }
        if let Some(size) = parse_var::<usize>(&lookup, "BOARD_SIZE")? {
            if size == 0 {
                return Err(invalid("BOARD_SIZE", "0", "must be at least 1"));
            }
            config.board.board_size = size;
        }
        if let Some(mins) = parse_var::<i64>(&lookup, "BOARD_LATE_MINS")? {
            if mins < 0 {
                return Err(invalid("BOARD_LATE_MINS", &mins.to_string(), "must not be negative"));
            }
            config.board.late_threshold_mins = mins;
        }

        Ok(config)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| invalid(var, &raw, &e.to_string()))
}

fn positive_secs(var: &'static str, secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(invalid(var, "0", "must be at least 1 second"));
    }
    Ok(Duration::from_secs(secs))
}

fn invalid(var: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
