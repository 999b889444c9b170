//! Board configuration.

use std::time::Duration;

use super::lateness::{DEFAULT_LATE_THRESHOLD_MINS, LatenessPolicy};

/// Parameters for computing a station board.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Maximum rows in the arrivals and departures views.
    pub board_size: usize,

    /// Minutes of delay from which an arrival or departure is flagged late.
    pub late_threshold_mins: i64,

    /// How often "now" advances and the board is recomputed.
    pub refresh_interval: Duration,
}

impl BoardConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(board_size: usize, late_threshold_mins: i64, refresh_interval: Duration) -> Self {
        Self {
            board_size,
            late_threshold_mins,
            refresh_interval,
        }
    }

    /// The lateness rule for this board.
    pub fn lateness(&self) -> LatenessPolicy {
        LatenessPolicy::new(self.late_threshold_mins)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_size: 10,
            late_threshold_mins: DEFAULT_LATE_THRESHOLD_MINS,
            refresh_interval: Duration::from_secs(60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = BoardConfig::default();

        assert_eq!(config.board_size, 10);
        assert_eq!(config.late_threshold_mins, 6);
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
    }

    #[test]
    fn lateness_follows_threshold() {
        let config = BoardConfig::new(5, 3, Duration::from_secs(30));

        assert_eq!(config.board_size, 5);
        assert_eq!(config.lateness(), LatenessPolicy::new(3));
        assert_eq!(config.refresh_interval, Duration::from_secs(30));
    }
}
