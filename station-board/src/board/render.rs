//! Station-local rendering of board rows.
//!
//! Selection and sorting never look at local clock strings; this module is
//! the only place instants are converted to a station's wall clock.

use chrono::Timelike;
use serde::Serialize;

use crate::domain::{EventTimes, ScheduleEntry, Timestamp, parse_timestamp, timezone_for};

use super::view::BoardRow;

/// Shown in place of a time that is absent or could not be read.
pub const PLACEHOLDER: &str = "-";

/// Shown for an event whose realtime status the network reports as unknown.
pub const UNKNOWN_STATUS: &str = "?";

/// Clock formatting conventions for a display language.
///
/// Finnish writes times as `14.30`; the other supported languages use
/// `14:30`. Digits are always ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLocale {
    separator: char,
}

impl TimeLocale {
    /// Pick conventions from a BCP 47 style tag such as `fi`, `sv-SE` or `en_GB`.
    ///
    /// Unrecognised tags use `:`.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let separator = match language.as_str() {
            "fi" => '.',
            _ => ':',
        };
        Self { separator }
    }

    pub fn separator(&self) -> char {
        self.separator
    }
}

impl Default for TimeLocale {
    fn default() -> Self {
        Self { separator: ':' }
    }
}

/// Render an instant as a 24-hour `HH:MM` clock in the station's zone.
///
/// The zone comes from the station's country code, with UTC for codes
/// that are not recognised. A missing instant renders as `-`.
///
/// # Examples
///
/// ```
/// use station_board::board::{TimeLocale, render_local_time};
/// use station_board::domain::parse_timestamp;
///
/// let t = parse_timestamp("2025-11-20T08:05:00Z");
///
/// assert_eq!(render_local_time(t, "fi", TimeLocale::from_tag("fi")), "10.05");
/// assert_eq!(render_local_time(t, "gb", TimeLocale::from_tag("en")), "08:05");
/// assert_eq!(render_local_time(t, "zz", TimeLocale::default()), "08:05");
/// assert_eq!(render_local_time(None, "fi", TimeLocale::default()), "-");
/// ```
pub fn render_local_time(instant: Option<Timestamp>, country: &str, locale: TimeLocale) -> String {
    match instant {
        Some(instant) => {
            let local = instant.with_timezone(&timezone_for(country));
            format!(
                "{:02}{}{:02}",
                local.hour(),
                locale.separator(),
                local.minute()
            )
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Render a raw ISO-8601 string; unparseable input renders as `-`.
pub fn render_iso(instant: &str, country: &str, locale: TimeLocale) -> String {
    render_local_time(parse_timestamp(instant), country, locale)
}

/// What the realtime column shows for an event.
///
/// A recorded time wins over an explicit "unknown", which wins over a
/// forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CellStatus {
    Actual { time: String, late: bool },
    Unknown,
    Estimated { time: String },
    Empty,
}

impl CellStatus {
    fn classify(event: &EventTimes, late: bool, country: &str, locale: TimeLocale) -> Self {
        if let Some(actual) = event.actual {
            return CellStatus::Actual {
                time: render_local_time(Some(actual), country, locale),
                late,
            };
        }
        if !event.is_scheduled() {
            return CellStatus::Empty;
        }
        if event.unknown {
            return CellStatus::Unknown;
        }
        match event.estimated {
            Some(estimated) => CellStatus::Estimated {
                time: render_local_time(Some(estimated), country, locale),
            },
            None => CellStatus::Empty,
        }
    }

    /// Plain text for the cell: `10:07`, `?`, `~10:04` or `-`.
    pub fn text(&self) -> String {
        match self {
            CellStatus::Actual { time, .. } => time.clone(),
            CellStatus::Unknown => UNKNOWN_STATUS.to_string(),
            CellStatus::Estimated { time } => format!("~{time}"),
            CellStatus::Empty => PLACEHOLDER.to_string(),
        }
    }
}

/// One event (arrival or departure) as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCell {
    /// Timetable time, or `-` when the event does not happen here.
    pub scheduled: String,
    pub cancelled: bool,
    pub realtime: CellStatus,
}

impl EventCell {
    fn new(event: &EventTimes, late: bool, country: &str, locale: TimeLocale) -> Self {
        Self {
            scheduled: render_local_time(event.scheduled, country, locale),
            cancelled: event.is_scheduled() && event.cancelled,
            realtime: CellStatus::classify(event, late, country, locale),
        }
    }
}

/// A board row ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    /// Headcode, or type and number.
    pub train: String,
    pub train_type: String,
    pub train_number: u32,
    pub departure_date: Option<String>,
    pub line: Option<String>,
    pub origin: String,
    pub destination: String,
    pub company: String,
    pub track: String,
    pub stop_sector: Option<String>,
    pub arrival: EventCell,
    pub departure: EventCell,
}

impl RenderedRow {
    /// Render a row for a station in `country`.
    pub fn new(row: &BoardRow, country: &str, locale: TimeLocale) -> Self {
        let entry: &ScheduleEntry = &row.entry;
        Self {
            train: entry.train.label(),
            train_type: entry.train.train_type.clone(),
            train_number: entry.train.number,
            departure_date: entry.train.departure_date.map(|d| d.to_string()),
            line: entry.line.clone(),
            origin: entry.origin_name.clone(),
            destination: entry.destination_name.clone(),
            company: entry.company.clone(),
            track: entry
                .track_key()
                .as_str()
                .unwrap_or(PLACEHOLDER)
                .to_string(),
            stop_sector: entry.stop_sector.clone(),
            arrival: EventCell::new(&entry.arrival, row.arrival_late, country, locale),
            departure: EventCell::new(&entry.departure, row.departure_late, country, locale),
        }
    }
}

/// Render every row of a view.
pub fn render_rows(rows: &[BoardRow], country: &str, locale: TimeLocale) -> Vec<RenderedRow> {
    rows.iter()
        .map(|row| RenderedRow::new(row, country, locale))
        .collect()
}
