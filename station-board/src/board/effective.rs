//! Effective event times.
//!
//! A delayed train must stay on the board after its timetable time has
//! passed, so ranking works on the best-known time rather than the
//! scheduled one.

use crate::domain::{Direction, ScheduleEntry, Timestamp};

/// The best-known instant for an entry's arrival or departure.
///
/// Priority is actual, then estimated, then scheduled. An entry with no
/// scheduled time for `direction` does not take part in that direction at
/// all, whatever realtime data it carries.
///
/// # Examples
///
/// ```
/// use station_board::board::effective_time;
/// use station_board::domain::{Direction, EventTimes, ScheduleEntry, TrainId, parse_timestamp};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
/// let mut entry = ScheduleEntry::new(TrainId::new(date, "IC", 27));
///
/// let scheduled = parse_timestamp("2025-11-20T10:00:00Z").unwrap();
/// let estimated = parse_timestamp("2025-11-20T10:04:00Z").unwrap();
/// entry.departure = EventTimes::scheduled(scheduled).with_estimated(estimated);
///
/// assert_eq!(effective_time(&entry, Direction::Departure), Some(estimated));
/// assert_eq!(effective_time(&entry, Direction::Arrival), None);
/// ```
pub fn effective_time(entry: &ScheduleEntry, direction: Direction) -> Option<Timestamp> {
    let event = entry.event(direction);
    let scheduled = event.scheduled?;
    Some(event.actual.or(event.estimated).unwrap_or(scheduled))
}

/// The instant that decides which train occupies a track next.
///
/// Departure is preferred; a terminating train falls back to its arrival
/// since it holds the track until it gets there.
pub fn occupancy_time(entry: &ScheduleEntry) -> Option<Timestamp> {
    effective_time(entry, Direction::Departure)
        .or_else(|| effective_time(entry, Direction::Arrival))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{EventTimes, TrainId};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use proptest::prelude::*;

    fn base() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 11, 20, 0, 0, 0).unwrap()
    }

    fn opt_minutes() -> impl Strategy<Value = Option<i64>> {
        prop::option::of(0i64..2880)
    }

    proptest! {
        /// The result is always the first present of actual, estimated, scheduled
        #[test]
        fn priority_order(
            scheduled in opt_minutes(),
            estimated in opt_minutes(),
            actual in opt_minutes()
        ) {
            let to_ts = |m: Option<i64>| m.map(|m| base() + Duration::minutes(m));
            let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
            let mut e = ScheduleEntry::new(TrainId::new(date, "R", 1));
            e.arrival = EventTimes {
                scheduled: to_ts(scheduled),
                estimated: to_ts(estimated),
                actual: to_ts(actual),
                ..EventTimes::default()
            };

            let expected = if scheduled.is_some() {
                to_ts(actual).or(to_ts(estimated)).or(to_ts(scheduled))
            } else {
                None
            };
            prop_assert_eq!(effective_time(&e, Direction::Arrival), expected);
        }
    }
}
