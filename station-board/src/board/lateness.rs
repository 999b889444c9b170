//! Delay classification.

use crate::domain::Timestamp;

/// Minutes behind schedule from which an event counts as late.
pub const DEFAULT_LATE_THRESHOLD_MINS: i64 = 6;

/// Rule for flagging an event as late.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatenessPolicy {
    /// Whole minutes of delay at which an event becomes late.
    pub threshold_mins: i64,
}

impl LatenessPolicy {
    pub fn new(threshold_mins: i64) -> Self {
        Self { threshold_mins }
    }

    /// Classify an event from its scheduled and actual instants.
    ///
    /// The delay is measured in whole minutes, truncated toward zero.
    /// Missing times are never late, and neither is running early.
    pub fn is_late(&self, scheduled: Option<Timestamp>, actual: Option<Timestamp>) -> bool {
        match (scheduled, actual) {
            (Some(scheduled), Some(actual)) => {
                let delay = actual.signed_duration_since(scheduled).num_minutes();
                delay >= self.threshold_mins
            }
            _ => false,
        }
    }
}

impl Default for LatenessPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_LATE_THRESHOLD_MINS)
    }
}

/// Classify with the default six-minute threshold.
///
/// # Examples
///
/// ```
/// use station_board::board::is_late;
/// use station_board::domain::parse_timestamp;
///
/// let scheduled = parse_timestamp("2025-11-20T10:00:00Z");
///
/// assert!(!is_late(scheduled, parse_timestamp("2025-11-20T10:05:59Z")));
/// assert!(is_late(scheduled, parse_timestamp("2025-11-20T10:06:00Z")));
/// assert!(!is_late(scheduled, None));
/// ```
pub fn is_late(scheduled: Option<Timestamp>, actual: Option<Timestamp>) -> bool {
    LatenessPolicy::default().is_late(scheduled, actual)
}
