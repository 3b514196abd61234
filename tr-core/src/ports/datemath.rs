use crate::models::TimeZone;
use time::OffsetDateTime;

/// Interface for evaluating a single date-math expression.
///
/// An expression is anchored at "now" (as `now-5m/m`) or at an absolute date
/// (as `2024-01-01||+1d`). The implementation decides where "now" comes from.
pub trait DateMath {
    /// Resolve `text` into an instant.
    ///
    /// # Arguments
    ///
    /// - `text`: the expression to evaluate
    /// - `round_up`: whether rounding operations (`/d`, `/fy`, ...) snap to the end of the
    ///   unit rather than its start; callers pass `false` for the beginning of a range and
    ///   `true` for its end
    /// - `time_zone`: the zone in which rounding happens (UTC when omitted)
    /// - `fiscal_year_start_month`: zero-based month in which the fiscal year begins
    ///
    /// # Returns
    ///
    /// `None` if the expression cannot be evaluated. Callers treat this as "this side
    /// cannot be described" rather than as a fatal error.
    fn parse(
        &self,
        text: &str,
        round_up: bool,
        time_zone: Option<&TimeZone>,
        fiscal_year_start_month: u8,
    ) -> Option<OffsetDateTime>;
}

impl<T: DateMath + ?Sized> DateMath for &T {
    fn parse(
        &self,
        text: &str,
        round_up: bool,
        time_zone: Option<&TimeZone>,
        fiscal_year_start_month: u8,
    ) -> Option<OffsetDateTime> {
        (**self).parse(text, round_up, time_zone, fiscal_year_start_month)
    }
}
