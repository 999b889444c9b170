//! Absolute event instants.
//!
//! The schedule feed carries ISO-8601 timestamps. Everything that compares
//! or sorts times works on these absolute UTC instants; conversion to a
//! station-local wall clock only happens at render time.

use chrono::{DateTime, NaiveDateTime, Utc};

/// An absolute point in time, always UTC.
pub type Timestamp = DateTime<Utc>;

/// Formats accepted for timestamps that carry no offset. These are read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an ISO-8601 timestamp.
///
/// Offsets are honoured; a timestamp without an offset is taken as UTC.
/// Anything unparseable yields `None` so the caller can treat the field
/// as absent.
///
/// # Examples
///
/// ```
/// use station_board::domain::parse_timestamp;
///
/// let t = parse_timestamp("2025-11-20T08:15:00.000Z").unwrap();
/// assert_eq!(t.to_rfc3339(), "2025-11-20T08:15:00+00:00");
///
/// // Offsets are normalised to UTC
/// let t = parse_timestamp("2025-11-20T10:15:00+02:00").unwrap();
/// assert_eq!(t.to_rfc3339(), "2025-11-20T08:15:00+00:00");
///
/// assert!(parse_timestamp("not a time").is_none());
/// assert!(parse_timestamp("").is_none());
/// ```
pub fn parse_timestamp(s: &str) -> Option<Timestamp> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Parse an optional timestamp field, logging values that fail to parse.
pub(crate) fn parse_optional(field: &'static str, value: Option<&str>) -> Option<Timestamp> {
    let raw = value?;
    let parsed = parse_timestamp(raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        tracing::debug!(field, value = raw, "ignoring malformed timestamp");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_zulu_with_millis() {
        let t = parse_timestamp("2025-11-20T08:15:30.250Z").unwrap();
        assert_eq!(
            t,
            Utc.with_ymd_and_hms(2025, 11, 20, 8, 15, 30).unwrap()
                + chrono::Duration::milliseconds(250)
        );
    }

    #[test]
    fn parses_offset() {
        let t = parse_timestamp("2025-06-01T23:30:00+03:00").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2025, 6, 1, 20, 30, 0).unwrap());
    }

    #[test]
    fn naive_is_utc() {
        let t = parse_timestamp("2025-06-01T23:30:00").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2025, 6, 1, 23, 30, 0).unwrap());

        let t = parse_timestamp("2025-06-01 23:30:00").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2025, 6, 1, 23, 30, 0).unwrap());
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert!(parse_timestamp("  2025-06-01T23:30:00Z ").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
        assert!(parse_timestamp("14:30").is_none());
        assert!(parse_timestamp("2025-13-01T00:00:00Z").is_none());
        assert!(parse_timestamp("2025-02-30T00:00:00Z").is_none());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn optional_absent_stays_absent() {
        assert!(parse_optional("arrival", None).is_none());
        assert!(parse_optional("arrival", Some("bogus")).is_none());
        assert!(parse_optional("arrival", Some("2025-06-01T10:00:00Z")).is_some());
    }
}
