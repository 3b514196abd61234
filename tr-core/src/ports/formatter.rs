use crate::models::TimeZone;
use time::OffsetDateTime;

/// Interface for rendering absolute instants.
pub trait DateFormatter {
    /// Render an instant as a full date and time in the given zone
    fn format(&self, dt: OffsetDateTime, time_zone: Option<&TimeZone>) -> String;

    /// Render an instant relative to now, like `5 minutes ago` or `in 2 hours`
    fn format_time_ago(&self, dt: OffsetDateTime, time_zone: Option<&TimeZone>) -> String;

    /// The abbreviation of the zone in effect at the given instant
    fn time_zone_abbreviation(&self, dt: OffsetDateTime, time_zone: Option<&TimeZone>) -> String;
}
