use std::{fmt::Display, str::FromStr};
use time::{OffsetDateTime, UtcOffset};

/// The zone in which instants are rendered and date math is rounded.
///
/// Named zones with daylight-saving rules are not modelled; a fixed offset is
/// the finest grain supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum TimeZone {
    /// Coordinated universal time
    #[default]
    Utc,
    /// A fixed offset from UTC
    Fixed(UtcOffset),
}

impl TimeZone {
    /// The offset this zone applies
    pub fn offset(&self) -> UtcOffset {
        match self {
            Self::Utc => UtcOffset::UTC,
            Self::Fixed(offset) => *offset,
        }
    }

    /// Converts an instant into this zone
    pub fn apply(&self, dt: OffsetDateTime) -> OffsetDateTime {
        dt.to_offset(self.offset())
    }
}

/// Failure to understand a time-zone string
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("invalid time zone {0:?}, expected \"utc\" or an offset such as \"+03:00\"")]
pub struct TimeZoneError(pub String);

impl FromStr for TimeZone {
    type Err = TimeZoneError;

    /// Accepts `utc` (any case), `Z`, the empty string, or `±hh`, `±hhmm`, `±hh:mm`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("utc") || trimmed == "Z" {
            return Ok(Self::Utc);
        }

        let err = || TimeZoneError(s.to_owned());

        let (sign, rest) = match trimmed.as_bytes().first() {
            Some(b'+') => (1i8, &trimmed[1..]),
            Some(b'-') => (-1i8, &trimmed[1..]),
            _ => return Err(err()),
        };

        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let (hours, minutes) = match digits.len() {
            1 | 2 => (digits.as_str(), "0"),
            4 => digits.split_at(2),
            _ => return Err(err()),
        };
        let hours: i8 = hours.parse().map_err(|_| err())?;
        let minutes: i8 = minutes.parse().map_err(|_| err())?;

        let offset = UtcOffset::from_hms(sign * hours, sign * minutes, 0).map_err(|_| err())?;
        if offset.is_utc() {
            Ok(Self::Utc)
        } else {
            Ok(Self::Fixed(offset))
        }
    }
}

impl Display for TimeZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utc => f.write_str("utc"),
            Self::Fixed(offset) => {
                let (h, m, _) = offset.as_hms();
                let sign = if offset.is_negative() { '-' } else { '+' };
                write!(f, "{sign}{:02}:{:02}", h.unsigned_abs(), m.unsigned_abs())
            }
        }
    }
}

impl TryFrom<String> for TimeZone {
    type Error = TimeZoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeZone> for String {
    fn from(value: TimeZone) -> Self {
        value.to_string()
    }
}
