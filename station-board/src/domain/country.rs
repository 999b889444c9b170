//! Rail network countries and their time zones.

use std::fmt;

use chrono_tz::Tz;

/// Zone used for any country code we do not recognise.
pub const DEFAULT_TIMEZONE: Tz = Tz::UTC;

/// A national rail network whose feed the board understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Finland,
    Sweden,
    Norway,
    GreatBritain,
}

impl Country {
    /// All supported networks.
    pub const ALL: [Country; 4] = [
        Country::Finland,
        Country::Sweden,
        Country::Norway,
        Country::GreatBritain,
    ];

    /// Look up a network by its two-letter feed code, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use station_board::domain::Country;
    ///
    /// assert_eq!(Country::from_code("fi"), Some(Country::Finland));
    /// assert_eq!(Country::from_code("GB"), Some(Country::GreatBritain));
    /// assert_eq!(Country::from_code("de"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    /// The lowercase feed code.
    pub fn code(self) -> &'static str {
        match self {
            Country::Finland => "fi",
            Country::Sweden => "se",
            Country::Norway => "no",
            Country::GreatBritain => "gb",
        }
    }

    /// The IANA zone stations of this network keep their clocks in.
    pub fn timezone(self) -> Tz {
        match self {
            Country::Finland => chrono_tz::Europe::Helsinki,
            Country::Sweden => chrono_tz::Europe::Stockholm,
            Country::Norway => chrono_tz::Europe::Oslo,
            Country::GreatBritain => chrono_tz::Europe::London,
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolve a feed country code to a time zone, falling back to UTC.
///
/// # Examples
///
/// ```
/// use station_board::domain::timezone_for;
///
/// assert_eq!(timezone_for("no"), chrono_tz::Europe::Oslo);
/// assert_eq!(timezone_for("xx"), chrono_tz::UTC);
/// ```
pub fn timezone_for(code: &str) -> Tz {
    Country::from_code(code)
        .map(Country::timezone)
        .unwrap_or(DEFAULT_TIMEZONE)
}
