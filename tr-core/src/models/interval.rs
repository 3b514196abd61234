use std::{fmt::Display, str::FromStr};

/// The units an interval string may be suffixed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum IntervalUnit {
    /// `y`
    Year,
    /// `M`
    Month,
    /// `w`
    Week,
    /// `d`
    Day,
    /// `h`
    Hour,
    /// `m`
    Minute,
    /// `s`
    Second,
    /// `ms`
    Millisecond,
}

impl IntervalUnit {
    /// The suffix used for this unit in interval strings
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Year => "y",
            Self::Month => "M",
            Self::Week => "w",
            Self::Day => "d",
            Self::Hour => "h",
            Self::Minute => "m",
            Self::Second => "s",
            Self::Millisecond => "ms",
        }
    }

    /// The inverse of [`IntervalUnit::code`]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "y" => Some(Self::Year),
            "M" => Some(Self::Month),
            "w" => Some(Self::Week),
            "d" => Some(Self::Day),
            "h" => Some(Self::Hour),
            "m" => Some(Self::Minute),
            "s" => Some(Self::Second),
            "ms" => Some(Self::Millisecond),
            _ => None,
        }
    }
}

impl Display for IntervalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for IntervalUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("unknown interval unit {s:?}"))
    }
}

impl TryFrom<String> for IntervalUnit {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IntervalUnit> for String {
    fn from(value: IntervalUnit) -> Self {
        value.code().to_owned()
    }
}

/// The decomposed form of an interval string such as `5m`.
///
/// `count` is the integer part of the numeric prefix: `1.5h` decomposes into a
/// count of 1, not 1.5.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalDescriptor {
    /// Seconds per unit
    pub sec: f64,
    /// The unit the string was suffixed with (seconds for bare numbers)
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub unit: IntervalUnit,
    /// How many units
    pub count: i64,
}

impl IntervalDescriptor {
    /// The total length in seconds
    pub fn seconds(&self) -> f64 {
        self.sec * self.count as f64
    }

    /// The total length in milliseconds
    pub fn millis(&self) -> f64 {
        self.sec * 1000.0 * self.count as f64
    }
}

/// A computed step size together with its humanized label.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct IntervalValues {
    /// The step in milliseconds
    pub interval_ms: u64,
    /// The step as a short label, e.g. `30s`
    pub interval: String,
}
