use super::{catalog, text_range::describe_text_range};
use crate::{
    models::{DateOrString, RawTimeRange, TimeOption, TimeRange, TimeZone},
    ports::{DateFormatter, DateMath, DateTimeParser, ParseOptions},
};

/// Produces a human-readable description of a raw range.
///
/// The description is chosen in this order:
/// 1. the label of an exactly matching preset, checking `quick_ranges` before the
///    built-in catalog;
/// 2. both instants formatted in `time_zone`, when both sides are absolute;
/// 3. the absolute side formatted, and the relative side evaluated (in UTC) and
///    phrased relative to now, when exactly one side is absolute; if the relative
///    side cannot be evaluated the description is empty;
/// 4. the text-range description of `from`, when `to` is literally `now`;
/// 5. both expressions verbatim.
pub fn describe_time_range(
    range: &RawTimeRange,
    time_zone: Option<&TimeZone>,
    quick_ranges: Option<&[TimeOption]>,
    math: &impl DateMath,
    formatter: &impl DateFormatter,
) -> String {
    match (&range.from, &range.to) {
        (DateOrString::DateTime(from), DateOrString::DateTime(to)) => format!(
            "{} to {}",
            formatter.format(*from, time_zone),
            formatter.format(*to, time_zone)
        ),
        (DateOrString::DateTime(from), DateOrString::Expr(to)) => {
            match math.parse(to, true, Some(&TimeZone::Utc), 0) {
                Some(parsed) => format!(
                    "{} to {}",
                    formatter.format(*from, time_zone),
                    formatter.format_time_ago(parsed, time_zone)
                ),
                None => String::new(),
            }
        }
        (DateOrString::Expr(from), DateOrString::DateTime(to)) => {
            match math.parse(from, false, Some(&TimeZone::Utc), 0) {
                Some(parsed) => format!(
                    "{} to {}",
                    formatter.format_time_ago(parsed, time_zone),
                    formatter.format(*to, time_zone)
                ),
                None => String::new(),
            }
        }
        (DateOrString::Expr(from), DateOrString::Expr(to)) => {
            let custom = quick_ranges.unwrap_or_default();
            let options = custom.iter().chain(catalog::standard_range_options());
            if let Some(option) = catalog::find_range_in_options(from, to, options) {
                option.display.clone()
            } else if to == "now" {
                describe_text_range(from).display().to_owned()
            } else {
                format!("{from} to {to}")
            }
        }
    }
}

/// The abbreviation of `time_zone` at the start of the range
pub fn describe_time_range_abbreviation(
    range: &TimeRange,
    time_zone: Option<&TimeZone>,
    formatter: &impl DateFormatter,
) -> String {
    formatter.time_zone_abbreviation(range.from, time_zone)
}

/// Resolves both sides of a raw range into instants.
///
/// `from` is resolved rounding down and `to` rounding up. The returned `raw`
/// keeps each side that is a date-math expression and replaces anything else
/// (absolute instants and plain date strings) with its resolved instant.
pub fn convert_raw_to_range<P: DateTimeParser>(
    raw: &RawTimeRange,
    time_zone: Option<&TimeZone>,
    fiscal_year_start_month: u8,
    format: Option<&str>,
    parser: &P,
) -> Result<TimeRange, P::Error> {
    let mut options = ParseOptions {
        round_up: false,
        time_zone: time_zone.copied(),
        fiscal_year_start_month,
        format: format.map(str::to_owned),
    };
    let from = parser.parse(&raw.from, &options)?;

    options.round_up = true;
    let to = parser.parse(&raw.to, &options)?;

    let keep_or_resolve = |side: &DateOrString, resolved| match side {
        DateOrString::Expr(expr) if is_math_string(expr) => side.clone(),
        _ => DateOrString::DateTime(resolved),
    };

    Ok(TimeRange {
        from,
        to,
        raw: RawTimeRange {
            from: keep_or_resolve(&raw.from, from),
            to: keep_or_resolve(&raw.to, to),
        },
    })
}

/// Whether `text` is a date-math expression (anchored at `now` or at `<date>||`) rather than a plain date
pub fn is_math_string(text: &str) -> bool {
    text.starts_with("now") || text.contains("||")
}

/// Whether a range side is relative to now
pub fn is_relative_time(value: &DateOrString) -> bool {
    match value {
        DateOrString::DateTime(_) => false,
        DateOrString::Expr(expr) => expr.contains("now"),
    }
}

/// Whether either side of a raw range is relative to now
pub fn is_relative_time_range(raw: &RawTimeRange) -> bool {
    is_relative_time(&raw.from) || is_relative_time(&raw.to)
}

/// Whether either raw side rounds to a fiscal unit (`/fy`, `/fQ`)
pub fn is_fiscal(range: &TimeRange) -> bool {
    let has_fiscal = |side: &DateOrString| match side {
        DateOrString::DateTime(_) => false,
        DateOrString::Expr(expr) => expr.find('f').is_some_and(|at| at > 0),
    };
    has_fiscal(&range.raw.from) || has_fiscal(&range.raw.to)
}

// The integral value of `x` when it is nonzero
fn nonzero(x: f64) -> Option<i64> {
    (x != 0.0 && !x.is_nan()).then_some(x as i64)
}

/// Renders a number of seconds as its single largest nonzero unit.
///
/// Only the first nonzero term among years, days, hours, minutes, seconds and
/// milliseconds is kept, so `90` renders as `1m`.
pub fn seconds_to_hms(seconds: f64) -> String {
    let year = 31_536_000.0;
    let day = 86_400.0;

    if let Some(years) = nonzero((seconds / year).floor()) {
        return format!("{years}y");
    }
    if let Some(days) = nonzero(((seconds % year) / day).floor()) {
        return format!("{days}d");
    }
    if let Some(hours) = nonzero((((seconds % year) % day) / 3600.0).floor()) {
        return format!("{hours}h");
    }
    if let Some(minutes) = nonzero(((((seconds % year) % day) % 3600.0) / 60.0).floor()) {
        return format!("{minutes}m");
    }
    if let Some(secs) = nonzero((((seconds % year) % day) % 3600.0 % 60.0).floor()) {
        return format!("{secs}s");
    }
    if let Some(millis) = nonzero((seconds * 1000.0).floor()) {
        return format!("{millis}ms");
    }

    "less than a millisecond".to_owned()
}

/// Renders a span in milliseconds as hours, minutes and seconds, such as `1h 2min 5s`.
///
/// The span is first rounded to the nearest second; zero components are omitted.
pub fn ms_range_to_time_string(range_ms: f64) -> String {
    let range_sec = (range_ms / 1000.0).round();

    let h = (range_sec / 3600.0).floor();
    let m = (range_sec / 60.0).floor() - h * 60.0;
    let s = (range_sec % 60.0).round();

    let parts: Vec<String> = [(h, "h"), (m, "min"), (s, "s")]
        .into_iter()
        .filter_map(|(value, suffix)| nonzero(value).map(|value| format!("{value}{suffix}")))
        .collect();

    if parts.is_empty() {
        "less than 1s".to_owned()
    } else {
        parts.join(" ")
    }
}
