use std::fmt::Display;
use time::OffsetDateTime;

/// One side of a raw time range.
///
/// A side is either an absolute instant (carrying the offset it was created in)
/// or a date-math expression such as `now-6h` or `now/d` that is evaluated
/// against the current time whenever the range is resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "DateOrStringDto", into = "DateOrStringDto")
)]
pub enum DateOrString {
    /// An absolute instant
    DateTime(OffsetDateTime),
    /// A date-math expression
    Expr(String),
}

impl DateOrString {
    /// Returns the expression, if this side is not an absolute instant
    pub fn as_expr(&self) -> Option<&str> {
        match self {
            Self::DateTime(_) => None,
            Self::Expr(expr) => Some(expr),
        }
    }

    /// Returns the instant, if this side is absolute
    pub fn as_datetime(&self) -> Option<OffsetDateTime> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            Self::Expr(_) => None,
        }
    }
}

impl From<OffsetDateTime> for DateOrString {
    fn from(value: OffsetDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<&str> for DateOrString {
    fn from(value: &str) -> Self {
        Self::Expr(value.to_owned())
    }
}

impl From<String> for DateOrString {
    fn from(value: String) -> Self {
        Self::Expr(value)
    }
}

impl Display for DateOrString {
    /// Instants display in RFC 3339, expressions verbatim
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateTime(dt) => match dt.format(&time::format_description::well_known::Rfc3339)
            {
                Ok(text) => f.write_str(&text),
                Err(_) => write!(f, "{dt}"),
            },
            Self::Expr(expr) => f.write_str(expr),
        }
    }
}

/// A range as entered by the user: both sides may independently be absolute or relative.
///
/// No ordering between `from` and `to` is enforced at this layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawTimeRange {
    /// The beginning of the range
    pub from: DateOrString,
    /// The end of the range
    pub to: DateOrString,
}

impl RawTimeRange {
    /// Convenience constructor accepting anything convertible into a side
    pub fn new(from: impl Into<DateOrString>, to: impl Into<DateOrString>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// DTO to (de)serialize a side without an explicit tag.
///
/// Instants travel as epoch milliseconds, so the offset is not preserved and
/// deserialized instants are always UTC.
#[cfg(feature = "serde")]
#[derive(Debug, serde::Serialize)]
#[serde(untagged)]
enum DateOrStringDto {
    Millis(i64),
    Expr(String),
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DateOrStringDto {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde_untagged::UntaggedEnumVisitor::new()
            .i64(|ms| Ok(DateOrStringDto::Millis(ms)))
            .u64(|ms| {
                i64::try_from(ms).map(DateOrStringDto::Millis).map_err(|_| {
                    serde::de::Error::custom("timestamp out of range for epoch milliseconds")
                })
            })
            .string(|expr| Ok(DateOrStringDto::Expr(expr.to_owned())))
            .deserialize(deserializer)
    }
}

#[cfg(feature = "serde")]
impl From<DateOrStringDto> for DateOrString {
    fn from(value: DateOrStringDto) -> Self {
        match value {
            DateOrStringDto::Millis(ms) => {
                // Out-of-range timestamps clamp to the representable bounds
                let nanos = i128::from(ms) * 1_000_000;
                let dt = OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(if ms < 0 {
                    time::PrimitiveDateTime::MIN.assume_utc()
                } else {
                    time::PrimitiveDateTime::MAX.assume_utc()
                });
                Self::DateTime(dt)
            }
            DateOrStringDto::Expr(expr) => Self::Expr(expr),
        }
    }
}

#[cfg(feature = "serde")]
impl From<DateOrString> for DateOrStringDto {
    fn from(value: DateOrString) -> Self {
        match value {
            DateOrString::DateTime(dt) => {
                Self::Millis((dt.unix_timestamp_nanos() / 1_000_000) as i64)
            }
            DateOrString::Expr(expr) => Self::Expr(expr),
        }
    }
}
