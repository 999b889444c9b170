//! Which operating days a board needs.

use chrono::NaiveDate;

use crate::domain::{Timestamp, timezone_for};

/// Yesterday, today and tomorrow in the station's local zone.
///
/// Trains that started yesterday can still be running after midnight, and
/// late-evening boards need tomorrow's early departures.
pub fn window_dates(now: Timestamp, country: &str) -> [NaiveDate; 3] {
    let today = now.with_timezone(&timezone_for(country)).date_naive();
    [
        today.pred_opt().unwrap_or(today),
        today,
        today.succ_opt().unwrap_or(today),
    ]
}
