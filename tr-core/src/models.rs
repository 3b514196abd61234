mod date_or_string;
mod interval;
mod time_option;
mod time_range;
mod timezone;

pub use date_or_string::{DateOrString, RawTimeRange};
pub use interval::{IntervalDescriptor, IntervalUnit, IntervalValues};
pub use time_option::{TextRange, TimeOption};
pub use time_range::{RelativeTimeRange, TimeRange};
pub use timezone::{TimeZone, TimeZoneError};
