//! Upcoming arrivals and departures.

use std::borrow::Borrow;

use crate::domain::{Direction, ScheduleEntry, Timestamp};

use super::effective::effective_time;

pub(super) fn entry<E: Borrow<ScheduleEntry>>(e: &E) -> &ScheduleEntry {
    <E as Borrow<ScheduleEntry>>::borrow(e)
}

/// Entries still to arrive or depart, earliest first.
///
/// Keeps entries that have a scheduled time for `direction` and whose
/// effective time is at or after `now`, sorts them by effective time and
/// returns at most `limit` of them. The sort is stable: entries with the
/// same effective time keep their input order, so repeated evaluation of
/// the same schedule never reorders them.
///
/// Comparison is on absolute instants, so a delayed train whose timetable
/// time falls on the previous calendar day stays on the board until its
/// effective time passes.
pub fn select_upcoming<E>(
    entries: &[E],
    direction: Direction,
    now: Timestamp,
    limit: usize,
) -> Vec<&E>
where
    E: Borrow<ScheduleEntry>,
{
    let mut upcoming: Vec<(Timestamp, &E)> = entries
        .iter()
        .filter_map(|e| Some((effective_time(entry(e), direction)?, e)))
        .filter(|(at, _)| *at >= now)
        .collect();

    upcoming.sort_by_key(|(at, _)| *at);
    upcoming.truncate(limit);

    tracing::trace!(
        %direction,
        candidates = entries.len(),
        selected = upcoming.len(),
        "selected upcoming events"
    );

    upcoming.into_iter().map(|(_, e)| e).collect()
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

    prop_compose! {
        /// A departure with optional realtime data, times in minutes from base.
        fn departure()(
            scheduled in prop::option::weighted(0.9, 0i64..600),
            estimated in prop::option::of(0i64..600),
            actual in prop::option::of(0i64..600)
        ) -> EventTimes {
            let ts = |m: Option<i64>| m.map(|m| base() + Duration::minutes(m));
            EventTimes {
                scheduled: ts(scheduled),
                estimated: ts(estimated),
                actual: ts(actual),
                ..EventTimes::default()
            }
        }
    }

    fn schedule() -> impl Strategy<Value = Vec<ScheduleEntry>> {
        prop::collection::vec(departure(), 0..30).prop_map(|events| {
            let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
            events
                .into_iter()
                .enumerate()
                .map(|(i, ev)| {
                    let mut e = ScheduleEntry::new(TrainId::new(date, "R", i as u32));
                    e.departure = ev;
                    e
                })
                .collect()
        })
    }

    proptest! {
        /// Nothing that has already happened is selected
        #[test]
        fn never_in_the_past(entries in schedule(), now_min in 0i64..600, limit in 0usize..20) {
            let now = base() + Duration::minutes(now_min);
            for e in select_upcoming(&entries, Direction::Departure, now, limit) {
                let t = effective_time(e, Direction::Departure);
                prop_assert!(t.is_some_and(|t| t >= now));
            }
        }

        /// Output is ascending, and equal times keep input order
        #[test]
        fn sorted_and_stable(entries in schedule(), now_min in 0i64..600) {
            let now = base() + Duration::minutes(now_min);
            let out = select_upcoming(&entries, Direction::Departure, now, usize::MAX);
            for pair in out.windows(2) {
                let a = effective_time(pair[0], Direction::Departure);
                let b = effective_time(pair[1], Direction::Departure);
                prop_assert!(a <= b);
                if a == b {
                    prop_assert!(pair[0].train.number < pair[1].train.number);
                }
            }
        }

        /// The limit only truncates; it never changes which entries come first
        #[test]
        fn limit_is_a_prefix(entries in schedule(), now_min in 0i64..600, limit in 0usize..20) {
            let now = base() + Duration::minutes(now_min);
            let all = select_upcoming(&entries, Direction::Departure, now, usize::MAX);
            let limited = select_upcoming(&entries, Direction::Departure, now, limit);
            prop_assert_eq!(limited.len(), all.len().min(limit));
            for (a, b) in limited.iter().zip(all.iter()) {
                prop_assert!(std::ptr::eq(*a, *b));
            }
        }

        /// Every eligible entry is selected when the limit allows
        #[test]
        fn complete_without_limit(entries in schedule(), now_min in 0i64..600) {
            let now = base() + Duration::minutes(now_min);
            let out = select_upcoming(&entries, Direction::Departure, now, usize::MAX);
            let eligible = entries
                .iter()
                .filter(|e| effective_time(e, Direction::Departure).is_some_and(|t| t >= now))
                .count();
            prop_assert_eq!(out.len(), eligible);
        }
    }
}
