//! Schedule entries: one train's activity at a station.

use std::fmt;

use chrono::NaiveDate;

use super::{Timestamp, TrackKey};

/// Which half of a station call a view is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Arrival,
    Departure,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Arrival => f.write_str("arrival"),
            Direction::Departure => f.write_str("departure"),
        }
    }
}

/// Planned and realtime times for one event (arrival or departure).
///
/// `scheduled` is the timetable instant. `estimated` is a forecast and
/// `actual` a recorded time; either may be missing. `unknown` is set by
/// networks that flag an event whose realtime status cannot be determined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTimes {
    pub scheduled: Option<Timestamp>,
    pub estimated: Option<Timestamp>,
    pub actual: Option<Timestamp>,
    pub cancelled: bool,
    pub unknown: bool,
}

impl EventTimes {
    /// An event with only a timetable time.
    pub fn scheduled(at: Timestamp) -> Self {
        Self {
            scheduled: Some(at),
            ..Self::default()
        }
    }

    pub fn with_estimated(mut self, at: Timestamp) -> Self {
        self.estimated = Some(at);
        self
    }

    pub fn with_actual(mut self, at: Timestamp) -> Self {
        self.actual = Some(at);
        self
    }

    /// Whether the event happens at this station at all.
    pub fn is_scheduled(&self) -> bool {
        self.scheduled.is_some()
    }
}

/// Identifies a train run for display and de-duplication.
///
/// Unique within one station and one operating day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrainId {
    /// Operating day the run started on, if the feed sent a readable one.
    pub departure_date: Option<NaiveDate>,
    /// Product or category, e.g. "IC", "R", "HSL".
    pub train_type: String,
    pub number: u32,
    /// Network-assigned headcode, where the network uses them (e.g. "1A23").
    pub headcode: Option<String>,
}

impl TrainId {
    pub fn new(departure_date: NaiveDate, train_type: impl Into<String>, number: u32) -> Self {
        Self {
            departure_date: Some(departure_date),
            train_type: train_type.into(),
            number,
            headcode: None,
        }
    }

    /// The label a passenger sees: the headcode if there is one, else type and number.
    ///
    /// # Examples
    ///
    /// ```
    /// use station_board::domain::TrainId;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
    /// let mut id = TrainId::new(date, "IC", 27);
    /// assert_eq!(id.label(), "IC 27");
    ///
    /// id.headcode = Some("1A23".into());
    /// assert_eq!(id.label(), "1A23");
    /// ```
    pub fn label(&self) -> String {
        match self.headcode.as_deref() {
            Some(h) if !h.trim().is_empty() => h.to_string(),
            _ => format!("{} {}", self.train_type, self.number),
        }
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.train_type, self.number)?;
        match self.departure_date {
            Some(date) => write!(f, " ({date})"),
            None => Ok(()),
        }
    }
}

/// One train's scheduled activity at the station for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub train: TrainId,
    pub origin_name: String,
    pub destination_name: String,
    pub company: String,
    /// Commuter line letter or number, display only.
    pub line: Option<String>,
    pub arrival: EventTimes,
    pub departure: EventTimes,
    /// Raw track identifier as sent by the feed.
    pub track: Option<String>,
    /// Platform sector where the train stops, display only.
    pub stop_sector: Option<String>,
}

impl ScheduleEntry {
    /// Creates an entry with no events; callers fill in `arrival`/`departure`.
    pub fn new(train: TrainId) -> Self {
        Self {
            train,
            origin_name: String::new(),
            destination_name: String::new(),
            company: String::new(),
            line: None,
            arrival: EventTimes::default(),
            departure: EventTimes::default(),
            track: None,
            stop_sector: None,
        }
    }

    /// The times for one direction.
    pub fn event(&self, direction: Direction) -> &EventTimes {
        match direction {
            Direction::Arrival => &self.arrival,
            Direction::Departure => &self.departure,
        }
    }

    /// A record is only meaningful if it arrives at or departs from the station.
    pub fn is_valid(&self) -> bool {
        self.arrival.is_scheduled() || self.departure.is_scheduled()
    }

    /// The normalised track this train occupies.
    pub fn track_key(&self) -> TrackKey {
        TrackKey::normalize(self.track.as_deref())
    }
}
