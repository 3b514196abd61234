use super::RawTimeRange;
use time::OffsetDateTime;

/// A resolved range.
///
/// `raw` keeps what the user originally entered, so a relative range such as
/// `now-1h` can be redisplayed as text rather than as a frozen timestamp. A
/// `TimeRange` is rebuilt, never mutated, when "now" moves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeRange {
    /// The resolved beginning
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub from: OffsetDateTime,
    /// The resolved end
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub to: OffsetDateTime,
    /// The range as entered
    pub raw: RawTimeRange,
}

impl TimeRange {
    /// Builds an absolute range whose raw form is the two instants themselves
    pub fn absolute(from: OffsetDateTime, to: OffsetDateTime) -> Self {
        Self {
            from,
            to,
            raw: RawTimeRange::new(from, to),
        }
    }

    /// The length of the range in whole milliseconds
    pub fn span_millis(&self) -> i128 {
        (self.to - self.from).whole_milliseconds()
    }
}

/// A range stored as offsets before "now", in seconds.
///
/// `0` is now and positive values are in the past, so `{ from: 3600, to: 0 }`
/// is the last hour. Alert rules store ranges this way so they stay meaningful
/// whenever they are evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelativeTimeRange {
    /// Seconds before now at which the range begins
    pub from: i64,
    /// Seconds before now at which the range ends
    pub to: i64,
}
