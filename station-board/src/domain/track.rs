//! Track identifiers and their natural ordering.

use std::cmp::Ordering;
use std::fmt;

/// Placeholder shown for a train whose track is not known.
pub const UNKNOWN_TRACK: &str = "?";

/// A normalised track identifier.
///
/// Feeds send tracks as free-form strings or numbers, sometimes padded with
/// whitespace and sometimes missing. `TrackKey` trims the identifier and
/// collapses absent or blank values into [`TrackKey::Unknown`].
///
/// Keys order naturally: digit runs compare by numeric value, other text
/// compares case-insensitively, and `Unknown` sorts after every named track.
///
/// # Examples
///
/// ```
/// use station_board::domain::TrackKey;
///
/// let mut keys = vec![
///     TrackKey::normalize(Some("10")),
///     TrackKey::normalize(None),
///     TrackKey::normalize(Some(" 2 ")),
///     TrackKey::normalize(Some("1")),
/// ];
/// keys.sort();
///
/// let labels: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
/// assert_eq!(labels, ["1", "2", "10", "?"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrackKey {
    Named(String),
    Unknown,
}

impl TrackKey {
    /// Normalise a raw track identifier.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() => TrackKey::Named(s.to_string()),
            _ => TrackKey::Unknown,
        }
    }

    /// The track label, if known.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TrackKey::Named(s) => Some(s),
            TrackKey::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TrackKey::Unknown)
    }
}

impl Ord for TrackKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (TrackKey::Unknown, TrackKey::Unknown) => Ordering::Equal,
            (TrackKey::Unknown, TrackKey::Named(_)) => Ordering::Greater,
            (TrackKey::Named(_), TrackKey::Unknown) => Ordering::Less,
            // Fall back to bytes so distinct labels never compare equal
            (TrackKey::Named(a), TrackKey::Named(b)) => natural_cmp(a, b).then_with(|| a.cmp(b)),
        }
    }
}

impl PartialOrd for TrackKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TrackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(UNKNOWN_TRACK))
    }
}

/// A maximal run of either digits or non-digits.
#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> impl Iterator<Item = Chunk<'_>> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map_or(rest.len(), |(i, _)| i);
        let (head, tail) = rest.split_at(end);
        rest = tail;
        Some(if digits {
            Chunk::Digits(head)
        } else {
            Chunk::Text(head)
        })
    })
}

/// Compare two digit runs by value without overflowing on long runs.
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Natural string comparison: "2" < "10", "4a" < "4B" < "12".
///
/// Digits sort before letters when a digit run meets a text run.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);
    loop {
        let ord = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Digits(x)), Some(Chunk::Digits(y))) => cmp_digits(x, y),
            (Some(Chunk::Text(x)), Some(Chunk::Text(y))) => cmp_text(x, y),
            (Some(Chunk::Digits(_)), Some(Chunk::Text(_))) => Ordering::Less,
            (Some(Chunk::Text(_)), Some(Chunk::Digits(_))) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn track_label() -> impl Strategy<Value = String> {
        "[0-9]{1,3}[a-cA-C]?"
    }

    proptest! {
        /// Purely numeric labels order by their numeric value
        #[test]
        fn numeric_labels_match_integer_order(a in 0u32..1000, b in 0u32..1000) {
            prop_assert_eq!(natural_cmp(&a.to_string(), &b.to_string()), a.cmp(&b));
        }

        /// Ordering is antisymmetric
        #[test]
        fn antisymmetric(a in track_label(), b in track_label()) {
            prop_assert_eq!(key(&a).cmp(&key(&b)), key(&b).cmp(&key(&a)).reverse());
        }

        /// Ordering is transitive
        #[test]
        fn transitive(a in track_label(), b in track_label(), c in track_label()) {
            let (a, b, c) = (key(&a), key(&b), key(&c));
            if a <= b && b <= c {
                prop_assert!(a <= c);
            }
        }

        /// Unknown is greater than any named track
        #[test]
        fn unknown_is_max(a in track_label()) {
            prop_assert!(key(&a) < TrackKey::Unknown);
        }
    }

    fn key(s: &str) -> TrackKey {
        TrackKey::normalize(Some(s))
    }
}
