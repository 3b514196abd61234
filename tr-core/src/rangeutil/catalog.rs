//! The built-in quick-range presets.
//!
//! Presets are matched by the literal `(from, to)` pair, never semantically:
//! `now-1h` to `now` is "Last 1 hour" while `now-60m` to `now` matches nothing.
//! Saved dashboards rely on this, so lookups must stay exact string matches.

use crate::models::TimeOption;
use std::sync::LazyLock;

/// A compile-time catalog entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    /// The beginning of the range
    pub from: &'static str,
    /// The end of the range
    pub to: &'static str,
    /// The label shown for the range
    pub display: &'static str,
}

impl Preset {
    const fn new(from: &'static str, to: &'static str, display: &'static str) -> Self {
        Self { from, to, display }
    }
}

impl From<&Preset> for TimeOption {
    fn from(value: &Preset) -> Self {
        TimeOption::new(value.from, value.to, value.display)
    }
}

/// The presets offered to users, in catalog order
pub const BASE_RANGE_OPTIONS: [Preset; 37] = [
    Preset::new("now/d", "now/d", "Today"),
    Preset::new("now/d", "now", "Today so far"),
    Preset::new("now/w", "now/w", "This week"),
    Preset::new("now/w", "now", "This week so far"),
    Preset::new("now/M", "now/M", "This month"),
    Preset::new("now/M", "now", "This month so far"),
    Preset::new("now/y", "now/y", "This year"),
    Preset::new("now/y", "now", "This year so far"),
    Preset::new("now-1d/d", "now-1d/d", "Yesterday"),
    Preset::new("now-2d/d", "now-2d/d", "Day before yesterday"),
    Preset::new("now-7d/d", "now-7d/d", "This day last week"),
    Preset::new("now-1w/w", "now-1w/w", "Previous week"),
    Preset::new("now-1M/M", "now-1M/M", "Previous month"),
    Preset::new("now-1Q/fQ", "now-1Q/fQ", "Previous fiscal quarter"),
    Preset::new("now-1y/y", "now-1y/y", "Previous year"),
    Preset::new("now-1y/fy", "now-1y/fy", "Previous fiscal year"),
    Preset::new("now-5m", "now", "Last 5 minutes"),
    Preset::new("now-15m", "now", "Last 15 minutes"),
    Preset::new("now-30m", "now", "Last 30 minutes"),
    Preset::new("now-1h", "now", "Last 1 hour"),
    Preset::new("now-3h", "now", "Last 3 hours"),
    Preset::new("now-6h", "now", "Last 6 hours"),
    Preset::new("now-12h", "now", "Last 12 hours"),
    Preset::new("now-24h", "now", "Last 24 hours"),
    Preset::new("now-2d", "now", "Last 2 days"),
    Preset::new("now-7d", "now", "Last 7 days"),
    Preset::new("now-30d", "now", "Last 30 days"),
    Preset::new("now-90d", "now", "Last 90 days"),
    Preset::new("now-6M", "now", "Last 6 months"),
    Preset::new("now-1y", "now", "Last 1 year"),
    Preset::new("now-2y", "now", "Last 2 years"),
    Preset::new("now-5y", "now", "Last 5 years"),
    Preset::new("now-1d/d+7h", "now/1d-1d+7h", "7am to 7am summary"),
    Preset::new("now/fQ", "now", "This fiscal quarter so far"),
    Preset::new("now/fQ", "now/fQ", "This fiscal quarter"),
    Preset::new("now/fy", "now", "This fiscal year so far"),
    Preset::new("now/fy", "now/fy", "This fiscal year"),
];

/// Future-facing presets that are recognized but not offered in pickers
pub const HIDDEN_RANGE_OPTIONS: [Preset; 17] = [
    Preset::new("now", "now+1m", "Next minute"),
    Preset::new("now", "now+5m", "Next 5 minutes"),
    Preset::new("now", "now+15m", "Next 15 minutes"),
    Preset::new("now", "now+30m", "Next 30 minutes"),
    Preset::new("now", "now+1h", "Next hour"),
    Preset::new("now", "now+3h", "Next 3 hours"),
    Preset::new("now", "now+6h", "Next 6 hours"),
    Preset::new("now", "now+12h", "Next 12 hours"),
    Preset::new("now", "now+24h", "Next 24 hours"),
    Preset::new("now", "now+2d", "Next 2 days"),
    Preset::new("now", "now+7d", "Next 7 days"),
    Preset::new("now", "now+30d", "Next 30 days"),
    Preset::new("now", "now+90d", "Next 90 days"),
    Preset::new("now", "now+6M", "Next 6 months"),
    Preset::new("now", "now+1y", "Next year"),
    Preset::new("now", "now+2y", "Next 2 years"),
    Preset::new("now", "now+5y", "Next 5 years"),
];

/// The picker menu, in display order
pub const QUICK_OPTIONS: [Preset; 25] = [
    Preset::new("now-5m", "now", "Last 5 minutes"),
    Preset::new("now-15m", "now", "Last 15 minutes"),
    Preset::new("now-30m", "now", "Last 30 minutes"),
    Preset::new("now-1h", "now", "Last 1 hour"),
    Preset::new("now-3h", "now", "Last 3 hours"),
    Preset::new("now-6h", "now", "Last 6 hours"),
    Preset::new("now-12h", "now", "Last 12 hours"),
    Preset::new("now-24h", "now", "Last 24 hours"),
    Preset::new("now-2d", "now", "Last 2 days"),
    Preset::new("now-7d", "now", "Last 7 days"),
    Preset::new("now-30d", "now", "Last 30 days"),
    Preset::new("now-90d", "now", "Last 90 days"),
    Preset::new("now-6M", "now", "Last 6 months"),
    Preset::new("now-1y", "now", "Last 1 year"),
    Preset::new("now-1d/d+7h", "now/1d-1d+7h", "7am to 7am summary"),
    Preset::new("now-1d/d", "now-1d/d", "Yesterday"),
    Preset::new("now-2d/d", "now-2d/d", "Day before yesterday"),
    Preset::new("now-7d/d", "now-7d/d", "This day last week"),
    Preset::new("now-1w/w", "now-1w/w", "Previous week"),
    Preset::new("now-1M/M", "now-1M/M", "Previous month"),
    Preset::new("now-1y/y", "now-1y/y", "Previous year"),
    Preset::new("now/d", "now/d", "Today"),
    Preset::new("now/w", "now/w", "This week"),
    Preset::new("now/M", "now/M", "This month"),
    Preset::new("now/y", "now/y", "This year"),
];

static STANDARD_RANGE_OPTIONS: LazyLock<Vec<TimeOption>> = LazyLock::new(|| {
    BASE_RANGE_OPTIONS
        .iter()
        .chain(HIDDEN_RANGE_OPTIONS.iter())
        .map(TimeOption::from)
        .collect()
});

static QUICK_RANGE_OPTIONS: LazyLock<Vec<TimeOption>> =
    LazyLock::new(|| QUICK_OPTIONS.iter().map(TimeOption::from).collect());

/// Every recognized preset: the visible ones followed by the hidden ones
pub fn standard_range_options() -> &'static [TimeOption] {
    &STANDARD_RANGE_OPTIONS
}

/// The picker menu entries
pub fn quick_options() -> &'static [TimeOption] {
    &QUICK_RANGE_OPTIONS
}

/// Finds the first option keyed by exactly `(from, to)`
pub fn find_range_in_options<'a>(
    from: &str,
    to: &str,
    options: impl IntoIterator<Item = &'a TimeOption>,
) -> Option<&'a TimeOption> {
    options.into_iter().find(|option| option.matches(from, to))
}
