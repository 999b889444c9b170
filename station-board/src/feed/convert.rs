//! Conversion from schedule DTOs to domain types.
//!
//! Malformed timestamps and dates degrade to absent fields. Records that
//! neither arrive nor depart are skipped.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::{EventTimes, ScheduleEntry, TrainId, parse_optional};

use super::types::StationTrainDto;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The record has no scheduled arrival or departure at this station
    #[error("train {0} neither arrives nor departs")]
    NoScheduledEvent(String),
}

/// Convert a single schedule record.
pub fn convert_train(dto: &StationTrainDto) -> Result<ScheduleEntry, ConversionError> {
    let departure_date = dto.departure_date.as_deref().and_then(|raw| {
        let parsed = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok();
        if parsed.is_none() {
            tracing::debug!(value = raw, "ignoring malformed departure date");
        }
        parsed
    });

    let train = TrainId {
        departure_date,
        train_type: dto.train_type.trim().to_string(),
        number: dto.train_number,
        headcode: dto.headcode.clone().filter(|h| !h.trim().is_empty()),
    };

    let arrival = EventTimes {
        scheduled: parse_optional("arrival", dto.arrival.as_deref()),
        estimated: parse_optional("estimated_arrival", dto.estimated_arrival.as_deref()),
        actual: parse_optional("actual_arrival", dto.actual_arrival.as_deref()),
        cancelled: dto.cancelled_arrival.unwrap_or(false),
        unknown: dto.unknown_arrival.unwrap_or(false),
    };

    let departure = EventTimes {
        scheduled: parse_optional("departure", dto.departure.as_deref()),
        estimated: parse_optional("estimated_departure", dto.estimated_departure.as_deref()),
        actual: parse_optional("actual_departure", dto.actual_departure.as_deref()),
        cancelled: dto.cancelled_departure.unwrap_or(false),
        unknown: dto.unknown_departure.unwrap_or(false),
    };

    let entry = ScheduleEntry {
        origin_name: dto.origin_name.clone().unwrap_or_default(),
        destination_name: dto.destination_name.clone().unwrap_or_default(),
        company: dto.company.clone().unwrap_or_default(),
        line: dto.line_no.clone().filter(|l| !l.trim().is_empty()),
        arrival,
        departure,
        track: dto.platform.clone(),
        stop_sector: dto.stop_sector.clone(),
        train,
    };

    if !entry.is_valid() {
        return Err(ConversionError::NoScheduledEvent(entry.train.to_string()));
    }

    Ok(entry)
}

/// Convert a day's schedule, skipping records that fail conversion.
pub fn convert_schedule(dtos: &[StationTrainDto]) -> Vec<ScheduleEntry> {
    let mut entries = Vec::with_capacity(dtos.len());

    for dto in dtos {
        match convert_train(dto) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::warn!(
                    train_type = %dto.train_type,
                    train_number = dto.train_number,
                    error = %e,
                    "skipping schedule record"
                );
            }
        }
    }

    entries
}

/// Concatenate per-day schedules in order, dropping repeated records.
///
/// Adjacent days can overlap around midnight; the first copy of a train
/// run (same operating day, type and number) is kept. Runs without a
/// readable operating day are matched on type and number alone.
pub fn combine_days(days: impl IntoIterator<Item = Vec<ScheduleEntry>>) -> Vec<ScheduleEntry> {
    let mut seen = HashSet::new();
    let mut combined = Vec::new();

    for entry in days.into_iter().flatten() {
        let key = (
            entry.train.departure_date,
            entry.train.train_type.clone(),
            entry.train.number,
        );
        if seen.insert(key) {
            combined.push(entry);
        } else {
            tracing::trace!(train = %entry.train, "dropping duplicate record");
        }
    }

    combined
}
