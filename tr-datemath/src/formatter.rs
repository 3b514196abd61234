use crate::clock::Clock;
use time::{OffsetDateTime, macros::format_description};
use tracing::{Level, event};
use tr_core::{models::TimeZone, ports::DateFormatter};

/// Renders instants as `YYYY-MM-DD HH:MM:SS` in a zone and phrases them
/// relative to the clock's `now`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Formatter {
    /// The source of `now` for relative phrasing
    pub clock: Clock,
}

impl Formatter {
    /// A formatter measuring relative phrases against `clock`
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }
}

impl DateFormatter for Formatter {
    fn format(&self, dt: OffsetDateTime, time_zone: Option<&TimeZone>) -> String {
        let dt = time_zone.copied().unwrap_or_default().apply(dt);
        dt.format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ))
        .unwrap_or_else(|error| {
            event!(Level::WARN, %error, "cannot format instant");
            dt.to_string()
        })
    }

    fn format_time_ago(&self, dt: OffsetDateTime, _time_zone: Option<&TimeZone>) -> String {
        let delta = (dt - self.clock.now()).as_seconds_f64();
        let phrase = relative_phrase(delta.abs());
        if delta > 0.0 {
            format!("in {phrase}")
        } else {
            format!("{phrase} ago")
        }
    }

    fn time_zone_abbreviation(&self, _dt: OffsetDateTime, time_zone: Option<&TimeZone>) -> String {
        match time_zone {
            Some(TimeZone::Fixed(offset)) if !offset.is_utc() => {
                format!("UTC{}", TimeZone::Fixed(*offset))
            }
            _ => "UTC".to_owned(),
        }
    }
}

// Days in 400 years over months in 400 years
const DAYS_PER_MONTH: f64 = 146_097.0 / 4_800.0;

/// Phrases a distance in seconds the way humans say it: "a few seconds",
/// "a minute", "5 minutes", "an hour", up to "3 years".
///
/// Each unit is rounded separately and the first one under its threshold wins
/// (44 seconds, 45 minutes, 22 hours, 26 days, 11 months).
fn relative_phrase(seconds: f64) -> String {
    let days = seconds / 86_400.0;
    let months = (days / DAYS_PER_MONTH).round();
    let years = (days / DAYS_PER_MONTH / 12.0).round();
    let minutes = (seconds / 60.0).round();
    let hours = (seconds / 3_600.0).round();
    let days = days.round();
    let seconds = seconds.round();

    let (count, unit) = if seconds <= 44.0 {
        return "a few seconds".to_owned();
    } else if minutes <= 1.0 {
        return "a minute".to_owned();
    } else if minutes < 45.0 {
        (minutes, "minutes")
    } else if hours <= 1.0 {
        return "an hour".to_owned();
    } else if hours < 22.0 {
        (hours, "hours")
    } else if days <= 1.0 {
        return "a day".to_owned();
    } else if days < 26.0 {
        (days, "days")
    } else if months <= 1.0 {
        return "a month".to_owned();
    } else if months < 11.0 {
        (months, "months")
    } else if years <= 1.0 {
        return "a year".to_owned();
    } else {
        (years, "years")
    };

    format!("{} {unit}", count as i64)
}
