use crate::models::{DateOrString, TimeZone};
use time::OffsetDateTime;

/// Options controlling how one side of a raw range is resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Snap rounding operations to the end of the unit (used for the `to` side)
    pub round_up: bool,
    /// The zone to resolve into
    pub time_zone: Option<TimeZone>,
    /// Zero-based month in which the fiscal year begins
    pub fiscal_year_start_month: u8,
    /// A format description for plain date strings, in the `time` crate's syntax
    pub format: Option<String>,
}

/// Interface for turning a raw range side into a concrete instant.
pub trait DateTimeParser {
    /// Error type for values that cannot be resolved
    type Error: std::error::Error;

    /// Resolve `value` into an instant according to `options`
    fn parse(
        &self,
        value: &DateOrString,
        options: &ParseOptions,
    ) -> Result<OffsetDateTime, Self::Error>;
}
