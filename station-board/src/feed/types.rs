//! Station schedule DTOs.
//!
//! These types map directly to the upstream station schedule JSON. Most
//! fields are nullable upstream, so they are `Option` here and defaults
//! are applied during conversion.

use serde::{Deserialize, Deserializer};

/// One train's call at a station, as sent by the schedule API.
#[derive(Debug, Clone, Deserialize)]
pub struct StationTrainDto {
    /// Operating day the run started on ("YYYY-MM-DD").
    #[serde(default)]
    pub departure_date: Option<String>,

    pub train_number: u32,

    /// Headcode, on networks that use them.
    #[serde(default)]
    pub headcode: Option<String>,

    pub train_type: String,

    /// Commuter line identifier.
    #[serde(default)]
    pub line_no: Option<String>,

    #[serde(default)]
    pub origin_name: Option<String>,

    #[serde(default)]
    pub destination_name: Option<String>,

    /// Operating company.
    #[serde(default)]
    pub company: Option<String>,

    /// Scheduled arrival (ISO 8601).
    #[serde(default)]
    pub arrival: Option<String>,

    #[serde(default)]
    pub estimated_arrival: Option<String>,

    #[serde(default)]
    pub actual_arrival: Option<String>,

    #[serde(default)]
    pub cancelled_arrival: Option<bool>,

    #[serde(default)]
    pub unknown_arrival: Option<bool>,

    /// Scheduled departure (ISO 8601).
    #[serde(default)]
    pub departure: Option<String>,

    #[serde(default)]
    pub estimated_departure: Option<String>,

    #[serde(default)]
    pub actual_departure: Option<String>,

    #[serde(default)]
    pub cancelled_departure: Option<bool>,

    #[serde(default)]
    pub unknown_departure: Option<bool>,

    /// Track, sent as a string by some networks and a number by others.
    #[serde(default, deserialize_with = "string_or_number")]
    pub platform: Option<String>,

    /// Platform sector.
    #[serde(default)]
    pub stop_sector: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTrack {
    Text(String),
    Number(serde_json::Number),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTrack>::deserialize(deserializer)?;
    Ok(raw.map(|track| match track {
        RawTrack::Text(s) => s,
        RawTrack::Number(n) => n.to_string(),
    }))
}
