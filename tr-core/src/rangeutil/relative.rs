use crate::models::{RelativeTimeRange, TimeRange};
use time::{Duration, OffsetDateTime};

/// Converts an absolute range into offsets before `now`, in whole seconds.
///
/// Both instants are truncated to unix seconds before subtracting, so the
/// conversion is exact to the second and involves no further rounding.
pub fn time_range_to_relative(range: &TimeRange, now: OffsetDateTime) -> RelativeTimeRange {
    let now = now.unix_timestamp();
    RelativeTimeRange {
        from: now - range.from.unix_timestamp(),
        to: now - range.to.unix_timestamp(),
    }
}

/// [`time_range_to_relative`] against the current system time
pub fn time_range_to_relative_now(range: &TimeRange) -> RelativeTimeRange {
    time_range_to_relative(range, OffsetDateTime::now_utc())
}

/// Converts offsets before `now` back into an absolute range.
///
/// An offset of exactly `0` for `to` yields `now` itself. The returned `raw`
/// holds the two resolved instants. Returns `None` when either side falls
/// outside the representable range of instants.
pub fn relative_to_time_range(
    relative: &RelativeTimeRange,
    now: OffsetDateTime,
) -> Option<TimeRange> {
    let from = now.checked_sub(Duration::seconds(relative.from))?;
    let to = if relative.to == 0 {
        now
    } else {
        now.checked_sub(Duration::seconds(relative.to))?
    };

    Some(TimeRange::absolute(from, to))
}

/// [`relative_to_time_range`] against the current system time
pub fn relative_to_time_range_now(relative: &RelativeTimeRange) -> Option<TimeRange> {
    relative_to_time_range(relative, OffsetDateTime::now_utc())
}
