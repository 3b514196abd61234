mod catalog;
mod describe;
mod interval;
mod relative;
mod text_range;
mod units;

pub use catalog::{
    BASE_RANGE_OPTIONS, HIDDEN_RANGE_OPTIONS, Preset, QUICK_OPTIONS, find_range_in_options,
    quick_options, standard_range_options,
};
pub use describe::{
    convert_raw_to_range, describe_time_range, describe_time_range_abbreviation, is_fiscal,
    is_math_string,
    is_relative_time, is_relative_time_range, ms_range_to_time_string, seconds_to_hms,
};
pub use interval::{
    IntervalError, calculate_interval, describe_interval, interval_to_ms, interval_to_seconds,
    round_interval,
};
pub use relative::{
    relative_to_time_range, relative_to_time_range_now, time_range_to_relative,
    time_range_to_relative_now,
};
pub use text_range::{describe_text_range, is_valid_time_span};
pub use units::{INTERVALS_IN_SECONDS, SPANS, Span, interval_seconds, span};
