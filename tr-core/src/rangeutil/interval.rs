use super::{describe::seconds_to_hms, units::INTERVALS_IN_SECONDS, units::interval_seconds};
use crate::models::{IntervalDescriptor, IntervalUnit, IntervalValues, TimeRange};

/// Errors raised while decomposing an interval string
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum IntervalError {
    /// The string is neither a bare number nor a number followed by a known unit
    #[error(
        "Invalid interval string, has to be either unit-less or end with one of the following units: \"{0}\""
    )]
    Format(String),
    /// The scanner accepted a suffix the unit table does not know
    #[error("describe_interval failed: invalid interval string (unit {0:?})")]
    UnknownUnit(String),
}

impl IntervalError {
    fn format() -> Self {
        let units: Vec<&str> = INTERVALS_IN_SECONDS
            .iter()
            .map(|(unit, _)| unit.code())
            .collect();
        Self::Format(units.join(", "))
    }
}

/// Decomposes an interval string such as `5m`, `250ms` or `30` into its parts.
///
/// A string that reads as a non-zero number is taken to be seconds. Otherwise it
/// must start with an optionally negative, optionally fractional number followed
/// immediately by one of `ms`, `M`, `w`, `d`, `h`, `m`, `s`, `y`; anything after
/// the unit is ignored.
///
/// The count is the integer part of the number and the fraction is dropped, so
/// `1.5h` yields a count of 1.
pub fn describe_interval(text: &str) -> Result<IntervalDescriptor, IntervalError> {
    if let Ok(value) = text.trim().parse::<f64>() {
        if value.is_finite() && value != 0.0 {
            return Ok(IntervalDescriptor {
                sec: 1.0,
                unit: IntervalUnit::Second,
                count: leading_integer(text),
            });
        }
    }

    let (number, code) = scan_interval(text).ok_or_else(IntervalError::format)?;
    let (unit, sec) =
        interval_seconds(code).ok_or_else(|| IntervalError::UnknownUnit(code.to_owned()))?;

    Ok(IntervalDescriptor {
        sec,
        unit,
        count: leading_integer(number),
    })
}

/// The length of an interval string in seconds
pub fn interval_to_seconds(text: &str) -> Result<f64, IntervalError> {
    describe_interval(text).map(|info| info.seconds())
}

/// The length of an interval string in milliseconds
pub fn interval_to_ms(text: &str) -> Result<f64, IntervalError> {
    describe_interval(text).map(|info| info.millis())
}

// Splits `-?\d+(\.\d+)?(ms|[Mwdhmsy])` off the front of `text`, returning the
// numeric part and the unit suffix.
fn scan_interval(text: &str) -> Option<(&str, &str)> {
    let bytes = text.as_bytes();
    let mut i = usize::from(bytes.first() == Some(&b'-'));

    let digits = bytes[i..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    i += digits;

    if bytes.get(i) == Some(&b'.') {
        let fraction = bytes[i + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if fraction > 0 {
            i += 1 + fraction;
        }
    }

    let (number, rest) = text.split_at(i);
    if rest.starts_with("ms") {
        Some((number, &rest[..2]))
    } else if rest.starts_with(['M', 'w', 'd', 'h', 'm', 's', 'y']) {
        Some((number, &rest[..1]))
    } else {
        None
    }
}

// The integer prefix of `text` after optional whitespace and sign; 0 when there
// are no leading digits. Saturates rather than overflowing.
fn leading_integer(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = digits
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}

// (exclusive upper bound, bucket) pairs in increasing order. Each bound sits
// roughly midway between its bucket and the next.
const ROUNDING: [(f64, u64); 29] = [
    (10.0, 1),                     // 1ms
    (15.0, 10),                    // 10ms
    (35.0, 20),                    // 20ms
    (75.0, 50),                    // 50ms
    (150.0, 100),                  // 100ms
    (350.0, 200),                  // 200ms
    (750.0, 500),                  // 500ms
    (1_500.0, 1_000),              // 1s
    (3_500.0, 2_000),              // 2s
    (7_500.0, 5_000),              // 5s
    (12_500.0, 10_000),            // 10s
    (17_500.0, 15_000),            // 15s
    (25_000.0, 20_000),            // 20s
    (45_000.0, 30_000),            // 30s
    (90_000.0, 60_000),            // 1m
    (210_000.0, 120_000),          // 2m
    (450_000.0, 300_000),          // 5m
    (750_000.0, 600_000),          // 10m
    (1_050_000.0, 900_000),        // 15m
    (1_500_000.0, 1_200_000),      // 20m
    (2_700_000.0, 1_800_000),      // 30m
    (5_400_000.0, 3_600_000),      // 1h
    (9_000_000.0, 7_200_000),      // 2h
    (16_200_000.0, 10_800_000),    // 3h
    (32_400_000.0, 21_600_000),    // 6h
    (86_400_000.0, 43_200_000),    // 12h
    (604_800_000.0, 86_400_000),   // 1d
    (1_814_400_000.0, 604_800_000), // 1w
    (3_628_800_000.0, 2_592_000_000), // 30d
];

// Anything at or beyond the last bound
const LARGEST_BUCKET: u64 = 31_536_000_000; // 1y

/// Snaps a raw interval (in milliseconds) to the nearest "nice" bucket size.
///
/// Values past the last threshold, and NaN, map to one year.
pub fn round_interval(interval: f64) -> u64 {
    ROUNDING
        .iter()
        .find(|(bound, _)| interval < *bound)
        .map_or(LARGEST_BUCKET, |(_, bucket)| *bucket)
}

/// Picks a query step for showing `range` at `resolution` data points.
///
/// The step is the rounded span per point, raised to `low_limit_interval` (an
/// interval string like `1m`) when that is larger. Without a limit the floor is
/// one millisecond.
pub fn calculate_interval(
    range: &TimeRange,
    resolution: f64,
    low_limit_interval: Option<&str>,
) -> Result<IntervalValues, IntervalError> {
    let low_limit_ms = match low_limit_interval {
        Some(limit) if !limit.is_empty() => interval_to_ms(limit)?,
        _ => 1.0,
    };

    let candidate = round_interval(range.span_millis() as f64 / resolution);
    let interval_ms = if low_limit_ms > candidate as f64 {
        low_limit_ms as u64
    } else {
        candidate
    };

    Ok(IntervalValues {
        interval_ms,
        interval: seconds_to_hms(interval_ms as f64 / 1000.0),
    })
}
