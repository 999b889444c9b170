//! Station identity.

use std::fmt;

use super::error::FeedError;

/// A station within a country, e.g. `fi/HKI`.
///
/// Country codes are lowercased and station codes uppercased, so lookups
/// are case-insensitive. Both are restricted to ASCII letters, digits,
/// `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationKey {
    pub country: String,
    pub station: String,
}

impl StationKey {
    pub fn new(country: &str, station: &str) -> Result<Self, FeedError> {
        Ok(Self {
            country: validate(country)?.to_ascii_lowercase(),
            station: validate(station)?.to_ascii_uppercase(),
        })
    }
}

fn validate(code: &str) -> Result<&str, FeedError> {
    let code = code.trim();
    let valid = !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(code)
    } else {
        Err(FeedError::InvalidStation(code.to_string()))
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.country, self.station)
    }
}
