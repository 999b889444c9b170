//! Domain types for the station board.
//!
//! Schedule records, absolute event instants, countries and track
//! identifiers. Values here are already validated: conversion from the raw
//! feed happens in [`crate::feed`], so board code can trust what it gets.

mod country;
mod entry;
mod time;
mod track;

pub use country::{Country, DEFAULT_TIMEZONE, timezone_for};
pub use entry::{Direction, EventTimes, ScheduleEntry, TrainId};
pub use time::{Timestamp, parse_timestamp};
pub(crate) use time::parse_optional;
pub use track::{TrackKey, UNKNOWN_TRACK, natural_cmp};
