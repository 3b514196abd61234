//! Static unit tables.
//!
//! Month and year lengths are fixed approximations (30 and 365 days); no
//! calendar, leap-year or daylight-saving correction is applied anywhere these
//! tables are used.

use crate::models::IntervalUnit;

/// The display name of a relative-offset unit, with an optional picker grouping hint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// The unit letter used in expressions
    pub code: char,
    /// The singular English name
    pub display: &'static str,
    /// Picker grouping hint
    pub section: Option<u32>,
}

/// Names for the unit letters recognized in `now-<N><unit>` expressions
pub const SPANS: [Span; 7] = [
    Span {
        code: 's',
        display: "second",
        section: None,
    },
    Span {
        code: 'm',
        display: "minute",
        section: None,
    },
    Span {
        code: 'h',
        display: "hour",
        section: None,
    },
    Span {
        code: 'd',
        display: "day",
        section: None,
    },
    Span {
        code: 'w',
        display: "week",
        section: None,
    },
    Span {
        code: 'M',
        display: "month",
        section: None,
    },
    Span {
        code: 'y',
        display: "year",
        section: None,
    },
];

/// Looks up the display entry for a unit letter
pub fn span(code: char) -> Option<&'static Span> {
    SPANS.iter().find(|span| span.code == code)
}

/// Seconds per unit for interval arithmetic, largest first
pub const INTERVALS_IN_SECONDS: [(IntervalUnit, f64); 8] = [
    (IntervalUnit::Year, 31_536_000.0),
    (IntervalUnit::Month, 2_592_000.0),
    (IntervalUnit::Week, 604_800.0),
    (IntervalUnit::Day, 86_400.0),
    (IntervalUnit::Hour, 3_600.0),
    (IntervalUnit::Minute, 60.0),
    (IntervalUnit::Second, 1.0),
    (IntervalUnit::Millisecond, 0.001),
];

/// Looks up the seconds-per-unit for a suffix such as `ms` or `M`
pub fn interval_seconds(code: &str) -> Option<(IntervalUnit, f64)> {
    INTERVALS_IN_SECONDS
        .iter()
        .find(|(unit, _)| unit.code() == code)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_lookup() {
        assert_eq!(span('h').map(|s| s.display), Some("hour"));
        assert_eq!(span('M').map(|s| s.display), Some("month"));
        assert!(span('Q').is_none());
        assert!(span('x').is_none());
    }

    #[test]
    fn test_interval_approximations() {
        // fixed-length months and years
        assert_eq!(interval_seconds("M"), Some((IntervalUnit::Month, 30.0 * 86_400.0)));
        assert_eq!(interval_seconds("y"), Some((IntervalUnit::Year, 365.0 * 86_400.0)));
        assert_eq!(interval_seconds("ms"), Some((IntervalUnit::Millisecond, 0.001)));
        assert_eq!(interval_seconds("Q"), None);
    }
}
