//! The three board views and the "now" they are computed against.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{Direction, ScheduleEntry, Timestamp};

use super::config::BoardConfig;
use super::lateness::LatenessPolicy;
use super::select::select_upcoming;
use super::tracks::select_by_track;

/// The instant one board computation is evaluated against.
///
/// Captured once per computation and passed by value, so every view of a
/// board sees the same "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NowReference(Timestamp);

impl NowReference {
    pub fn at(instant: Timestamp) -> Self {
        Self(instant)
    }

    /// Floor a clock reading to a multiple of `interval` since the epoch.
    ///
    /// Readings within the same refresh interval map to the same reference,
    /// so the board only moves when the interval ticks over.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use station_board::board::NowReference;
    /// use station_board::domain::parse_timestamp;
    ///
    /// let reading = parse_timestamp("2025-11-20T10:00:42.5Z").unwrap();
    /// let now = NowReference::quantized(reading, Duration::from_secs(60));
    /// assert_eq!(now.instant(), parse_timestamp("2025-11-20T10:00:00Z").unwrap());
    /// ```
    pub fn quantized(instant: Timestamp, interval: Duration) -> Self {
        let step = i64::try_from(interval.as_secs()).unwrap_or(i64::MAX);
        if step == 0 {
            return Self(instant);
        }
        let secs = instant.timestamp();
        let floored = secs - secs.rem_euclid(step);
        Self(DateTime::from_timestamp(floored, 0).unwrap_or(instant))
    }

    pub fn instant(&self) -> Timestamp {
        self.0
    }
}

/// One of the board's tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Arrivals,
    #[default]
    Departures,
    Tracks,
}

impl View {
    pub const ALL: [View; 3] = [View::Arrivals, View::Departures, View::Tracks];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Arrivals => "arrivals",
            View::Departures => "departures",
            View::Tracks => "tracks",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a view name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown board view: {0}")]
pub struct UnknownView(String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// A schedule entry placed on the board, with its lateness precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub entry: Arc<ScheduleEntry>,
    pub arrival_late: bool,
    pub departure_late: bool,
}

impl BoardRow {
    fn new(entry: &Arc<ScheduleEntry>, lateness: LatenessPolicy) -> Self {
        Self {
            arrival_late: lateness.is_late(entry.arrival.scheduled, entry.arrival.actual),
            departure_late: lateness.is_late(entry.departure.scheduled, entry.departure.actual),
            entry: Arc::clone(entry),
        }
    }
}

/// Arrivals, departures and track occupancy for one station at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub now: Timestamp,
    pub arrivals: Vec<BoardRow>,
    pub departures: Vec<BoardRow>,
    pub tracks: Vec<BoardRow>,
}

impl Board {
    /// Compute all three views from a schedule snapshot.
    pub fn compute(
        schedule: &[Arc<ScheduleEntry>],
        now: NowReference,
        config: &BoardConfig,
    ) -> Self {
        let at = now.instant();
        let lateness = config.lateness();
        let rows = |selected: Vec<&Arc<ScheduleEntry>>| -> Vec<BoardRow> {
            selected
                .into_iter()
                .map(|e| BoardRow::new(e, lateness))
                .collect()
        };

        let board = Self {
            now: at,
            arrivals: rows(select_upcoming(
                schedule,
                Direction::Arrival,
                at,
                config.board_size,
            )),
            departures: rows(select_upcoming(
                schedule,
                Direction::Departure,
                at,
                config.board_size,
            )),
            tracks: rows(select_by_track(schedule, at)),
        };

        tracing::debug!(
            now = %at,
            entries = schedule.len(),
            arrivals = board.arrivals.len(),
            departures = board.departures.len(),
            tracks = board.tracks.len(),
            "computed board"
        );

        board
    }

    /// The rows of one view.
    pub fn view(&self, view: View) -> &[BoardRow] {
        match view {
            View::Arrivals => &self.arrivals,
            View::Departures => &self.departures,
            View::Tracks => &self.tracks,
        }
    }

    /// True when no view has anything to show.
    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty() && self.departures.is_empty() && self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventTimes, TrainId};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn at(h: u32, m: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2025, 11, 20, h, m, 0).unwrap()
    }

    fn train(number: u32) -> ScheduleEntry {
        let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        ScheduleEntry::new(TrainId::new(date, "IC", number))
    }

    fn numbers(rows: &[BoardRow]) -> Vec<u32> {
        rows.iter().map(|r| r.entry.train.number).collect()
    }

    #[test]
    fn quantized_floors_to_interval() {
        let reading = at(10, 0) + chrono::Duration::seconds(59);
        let now = NowReference::quantized(reading, Duration::from_secs(60));
        assert_eq!(now.instant(), at(10, 0));

        let now = NowReference::quantized(at(10, 7), Duration::from_secs(300));
        assert_eq!(now.instant(), at(10, 5));
    }

    #[test]
    fn quantized_zero_interval_is_identity() {
        let reading = at(10, 0) + chrono::Duration::milliseconds(1500);
        let now = NowReference::quantized(reading, Duration::ZERO);
        assert_eq!(now.instant(), reading);
    }

    #[test]
    fn view_names() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>(), Ok(view));
        }
        assert_eq!("Tracks".parse::<View>(), Ok(View::Tracks));
        assert!("platforms".parse::<View>().is_err());
        assert_eq!(View::default(), View::Departures);
    }

    #[test]
    fn late_departure_scenario() {
        let mut e = train(1);
        e.departure = EventTimes::scheduled(at(10, 0)).with_actual(at(10, 7));
        let schedule = vec![Arc::new(e)];

        let board = Board::compute(&schedule, NowReference::at(at(9, 0)), &BoardConfig::default());

        assert_eq!(numbers(&board.departures), vec![1]);
        assert!(board.departures[0].departure_late);
        assert!(!board.departures[0].arrival_late);
        assert!(board.arrivals.is_empty());
    }

    #[test]
    fn passed_arrival_scenario() {
        let mut e = train(1);
        e.arrival = EventTimes::scheduled(at(8, 0));
        let schedule = vec![Arc::new(e)];

        let board = Board::compute(&schedule, NowReference::at(at(8, 1)), &BoardConfig::default());
        assert!(board.arrivals.is_empty());
        assert!(board.tracks.is_empty());
        assert!(board.is_empty());
    }

    #[test]
    fn board_size_limits_direction_views_only() {
        let schedule: Vec<_> = (0..5)
            .map(|i| {
                let mut e = train(i);
                e.departure = EventTimes::scheduled(at(10, i));
                e.track = Some(i.to_string());
                Arc::new(e)
            })
            .collect();
        let config = BoardConfig {
            board_size: 2,
            ..BoardConfig::default()
        };

        let board = Board::compute(&schedule, NowReference::at(at(9, 0)), &config);
        assert_eq!(numbers(&board.departures), vec![0, 1]);
        assert_eq!(board.tracks.len(), 5);
    }

    #[test]
    fn lateness_uses_configured_threshold() {
        let mut e = train(1);
        e.arrival = EventTimes::scheduled(at(10, 0)).with_actual(at(10, 4));
        let schedule = vec![Arc::new(e)];
        let config = BoardConfig {
            late_threshold_mins: 3,
            ..BoardConfig::default()
        };

        let board = Board::compute(&schedule, NowReference::at(at(9, 0)), &config);
        assert!(board.arrivals[0].arrival_late);

        let board = Board::compute(&schedule, NowReference::at(at(9, 0)), &BoardConfig::default());
        assert!(!board.arrivals[0].arrival_late);
    }

    #[test]
    fn rows_share_schedule_entries() {
        let mut e = train(1);
        e.departure = EventTimes::scheduled(at(10, 0));
        let schedule = vec![Arc::new(e)];

        let board = Board::compute(&schedule, NowReference::at(at(9, 0)), &BoardConfig::default());
        assert!(Arc::ptr_eq(&board.view(View::Departures)[0].entry, &schedule[0]));
        assert!(Arc::ptr_eq(&board.view(View::Tracks)[0].entry, &schedule[0]));
    }

    #[test]
    fn recompute_is_deterministic() {
        let schedule: Vec<_> = (0..6)
            .map(|i| {
                let mut e = train(i);
                e.departure = EventTimes::scheduled(at(10, 0));
                Arc::new(e)
            })
            .collect();
        let now = NowReference::at(at(9, 0));

        let first = Board::compute(&schedule, now, &BoardConfig::default());
        let second = Board::compute(&schedule, now, &BoardConfig::default());
        assert_eq!(first, second);
    }
}
