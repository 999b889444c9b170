//! Track occupancy: the next train on each track.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::domain::{ScheduleEntry, Timestamp, TrackKey};

use super::effective::occupancy_time;
use super::select::entry;

/// The next train to use each track, ordered by track.
///
/// Every entry gets a reference time (departure if it departs, else
/// arrival, both effective times). Entries whose reference time is missing
/// or already past are dropped; the rest are taken in chronological order
/// and the first one seen on each normalised track claims it. Later trains
/// for a claimed track are not shown.
///
/// The result is in natural track order (`"2"` before `"10"`) with trains of
/// unknown track last, so at most one entry per [`TrackKey`] is returned.
pub fn select_by_track<E>(entries: &[E], now: Timestamp) -> Vec<&E>
where
    E: Borrow<ScheduleEntry>,
{
    let mut upcoming: Vec<(Timestamp, &E)> = entries
        .iter()
        .filter_map(|e| Some((occupancy_time(entry(e))?, e)))
        .filter(|(at, _)| *at >= now)
        .collect();

    upcoming.sort_by_key(|(at, _)| *at);

    let mut by_track: BTreeMap<TrackKey, &E> = BTreeMap::new();
    for (_, e) in upcoming {
        by_track.entry(entry(e).track_key()).or_insert(e);
    }

    tracing::trace!(
        candidates = entries.len(),
        tracks = by_track.len(),
        "resolved track occupancy"
    );

    by_track.into_values().collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{EventTimes, TrainId};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn base() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 11, 20, 0, 0, 0).unwrap()
    }

    fn schedule() -> impl Strategy<Value = Vec<ScheduleEntry>> {
        let record = (
            prop::option::of(0i64..600),
            prop::option::of(0i64..600),
            prop::option::of(prop::sample::select(vec!["1", "2", " 2", "10", "3a", "", " "])),
        );
        prop::collection::vec(record, 0..25).prop_map(|records| {
            let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
            records
                .into_iter()
                .enumerate()
                .map(|(i, (arr, dep, track))| {
                    let mut e = ScheduleEntry::new(TrainId::new(date, "R", i as u32));
                    if let Some(m) = arr {
                        e.arrival = EventTimes::scheduled(base() + Duration::minutes(m));
                    }
                    if let Some(m) = dep {
                        e.departure = EventTimes::scheduled(base() + Duration::minutes(m));
                    }
                    e.track = track.map(str::to_string);
                    e
                })
                .collect()
        })
    }

    proptest! {
        /// No two selected entries share a normalised track
        #[test]
        fn one_entry_per_track(entries in schedule(), now_min in 0i64..600) {
            let now = base() + Duration::minutes(now_min);
            let out = select_by_track(&entries, now);
            let keys: HashSet<TrackKey> = out.iter().map(|e| e.track_key()).collect();
            prop_assert_eq!(keys.len(), out.len());
        }

        /// Output is in strictly ascending track order
        #[test]
        fn ordered_by_track(entries in schedule(), now_min in 0i64..600) {
            let now = base() + Duration::minutes(now_min);
            let out = select_by_track(&entries, now);
            for pair in out.windows(2) {
                prop_assert!(pair[0].track_key() < pair[1].track_key());
            }
        }

        /// Each selected train is the earliest upcoming one on its track
        #[test]
        fn earliest_per_track(entries in schedule(), now_min in 0i64..600) {
            let now = base() + Duration::minutes(now_min);
            for chosen in select_by_track(&entries, now) {
                let t = occupancy_time(chosen);
                prop_assert!(t.is_some_and(|t| t >= now));
                for other in &entries {
                    if other.track_key() == chosen.track_key() {
                        if let Some(o) = occupancy_time(other).filter(|o| *o >= now) {
                            prop_assert!(t <= Some(o));
                        }
                    }
                }
            }
        }
    }
}
