//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::board::RenderedRow;

/// Query parameters for a board request.
#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    /// Display language tag (e.g. "fi", "en-GB"); defaults to the station's country
    pub locale: Option<String>,

    /// Only return this view ("arrivals", "departures" or "tracks")
    pub view: Option<String>,
}

/// A station board.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Country code (e.g., "fi")
    pub country: String,

    /// Station code (e.g., "HKI")
    pub station: String,

    /// IANA zone the times are shown in
    pub timezone: String,

    /// Language tag the times were formatted for
    pub locale: String,

    /// The instant the board was computed for (RFC 3339, UTC)
    pub now: String,

    /// Schedule snapshot the board was computed from
    pub schedule_version: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrivals: Option<Vec<RenderedRow>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub departures: Option<Vec<RenderedRow>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<RenderedRow>>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
