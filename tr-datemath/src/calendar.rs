use time::{Date, Duration, Month, OffsetDateTime, Time, Weekday};

/// The first day of a calendar week, used when rounding to `w`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum WeekStart {
    /// ISO weeks
    #[default]
    Monday,
    /// US weeks
    Sunday,
}

impl WeekStart {
    fn weekday(self) -> Weekday {
        match self {
            Self::Monday => Weekday::Monday,
            Self::Sunday => Weekday::Sunday,
        }
    }
}

/// A calendar unit that date math can add, subtract or round to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MathUnit {
    /// `y`
    Year,
    /// `Q`
    Quarter,
    /// `M`
    Month,
    /// `w`
    Week,
    /// `d`
    Day,
    /// `h`
    Hour,
    /// `m`
    Minute,
    /// `s`
    Second,
}

impl MathUnit {
    /// The unit for a date-math letter; letters are case-sensitive (`M` is month, `m` minute)
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'y' => Self::Year,
            'Q' => Self::Quarter,
            'M' => Self::Month,
            'w' => Self::Week,
            'd' => Self::Day,
            'h' => Self::Hour,
            'm' => Self::Minute,
            's' => Self::Second,
            _ => return None,
        })
    }

    /// The date-math letter of this unit
    pub fn code(self) -> char {
        match self {
            Self::Year => 'y',
            Self::Quarter => 'Q',
            Self::Month => 'M',
            Self::Week => 'w',
            Self::Day => 'd',
            Self::Hour => 'h',
            Self::Minute => 'm',
            Self::Second => 's',
        }
    }
}

// Builds a date, clamping the day to the length of the month
fn clamped_date(year: i32, month: u8, day: u8) -> Option<Date> {
    let month = Month::try_from(month).ok()?;
    let day = day.min(month.length(year));
    Date::from_calendar_date(year, month, day).ok()
}

/// Shifts `dt` by `months` calendar months, keeping the wall-clock time and
/// clamping the day (Jan 31 + 1 month is Feb 28 or 29).
pub(crate) fn add_months(dt: OffsetDateTime, months: i64) -> Option<OffsetDateTime> {
    let index = i64::from(dt.year())
        .checked_mul(12)?
        .checked_add(i64::from(u8::from(dt.month())) - 1)?
        .checked_add(months)?;
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u8::try_from(index.rem_euclid(12) + 1).ok()?;
    let date = clamped_date(year, month, dt.day())?;
    Some(dt.replace_date(date))
}

/// Adds `amount` units (negative to subtract)
pub(crate) fn add(dt: OffsetDateTime, amount: i64, unit: MathUnit) -> Option<OffsetDateTime> {
    let seconds_per = match unit {
        MathUnit::Year => return add_months(dt, amount.checked_mul(12)?),
        MathUnit::Quarter => return add_months(dt, amount.checked_mul(3)?),
        MathUnit::Month => return add_months(dt, amount),
        MathUnit::Week => 604_800,
        MathUnit::Day => 86_400,
        MathUnit::Hour => 3_600,
        MathUnit::Minute => 60,
        MathUnit::Second => 1,
    };
    dt.checked_add(Duration::seconds(amount.checked_mul(seconds_per)?))
}

/// The first instant of the unit containing `dt`, in `dt`'s offset
pub(crate) fn start_of(
    dt: OffsetDateTime,
    unit: MathUnit,
    week_start: WeekStart,
) -> Option<OffsetDateTime> {
    let month = u8::from(dt.month());
    let rounded = match unit {
        MathUnit::Year => dt
            .replace_date(clamped_date(dt.year(), 1, 1)?)
            .replace_time(Time::MIDNIGHT),
        MathUnit::Quarter => dt
            .replace_date(clamped_date(dt.year(), (month - 1) / 3 * 3 + 1, 1)?)
            .replace_time(Time::MIDNIGHT),
        MathUnit::Month => dt
            .replace_date(clamped_date(dt.year(), month, 1)?)
            .replace_time(Time::MIDNIGHT),
        MathUnit::Week => {
            let start = week_start.weekday();
            let back = (7 + dt.weekday().number_days_from_monday()
                - start.number_days_from_monday())
                % 7;
            let date = dt.date().checked_sub(Duration::days(i64::from(back)))?;
            dt.replace_date(date).replace_time(Time::MIDNIGHT)
        }
        MathUnit::Day => dt.replace_time(Time::MIDNIGHT),
        MathUnit::Hour => dt.replace_time(Time::from_hms(dt.hour(), 0, 0).ok()?),
        MathUnit::Minute => dt.replace_time(Time::from_hms(dt.hour(), dt.minute(), 0).ok()?),
        MathUnit::Second => dt.replace_nanosecond(0).ok()?,
    };
    Some(rounded)
}

/// The last millisecond of the unit containing `dt`
pub(crate) fn end_of(
    dt: OffsetDateTime,
    unit: MathUnit,
    week_start: WeekStart,
) -> Option<OffsetDateTime> {
    let start = start_of(dt, unit, week_start)?;
    add(start, 1, unit)?.checked_sub(Duration::milliseconds(1))
}

/// Rounds to the fiscal year or quarter whose year begins in month
/// `start_month` (0 = January). Other units are left untouched.
pub(crate) fn round_fiscal(
    dt: OffsetDateTime,
    unit: MathUnit,
    start_month: u8,
    round_up: bool,
) -> Option<OffsetDateTime> {
    let (period, extra) = match unit {
        MathUnit::Year => (12, 11),
        MathUnit::Quarter => (3, 2),
        _ => return Some(dt),
    };
    let month0 = i64::from(u8::from(dt.month())) - 1;
    let into_period = (month0 - i64::from(start_month % 12)).rem_euclid(period);

    let start = start_of(add_months(dt, -into_period)?, MathUnit::Month, WeekStart::Monday)?;
    if round_up {
        end_of(add_months(start, extra)?, MathUnit::Month, WeekStart::Monday)
    } else {
        Some(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_add_months_clamps() {
        assert_eq!(
            add_months(datetime!(2024-01-31 10:00 UTC), 1),
            Some(datetime!(2024-02-29 10:00 UTC))
        );
        assert_eq!(
            add_months(datetime!(2023-03-31 0:00 UTC), -1),
            Some(datetime!(2023-02-28 0:00 UTC))
        );
        assert_eq!(
            add_months(datetime!(2024-11-15 0:00 UTC), 3),
            Some(datetime!(2025-02-15 0:00 UTC))
        );
        assert_eq!(
            add_months(datetime!(2024-02-29 0:00 UTC), 12),
            Some(datetime!(2025-02-28 0:00 UTC))
        );
    }

    #[test]
    fn test_add_overflow() {
        assert_eq!(add(datetime!(2024-01-01 0:00 UTC), i64::MAX, MathUnit::Week), None);
        assert_eq!(add(datetime!(2024-01-01 0:00 UTC), 100_000, MathUnit::Year), None);
    }

    #[test]
    fn test_start_of_week() {
        // 2024-06-05 is a Wednesday
        let wed = datetime!(2024-06-05 15:30 UTC);
        assert_eq!(
            start_of(wed, MathUnit::Week, WeekStart::Monday),
            Some(datetime!(2024-06-03 0:00 UTC))
        );
        assert_eq!(
            start_of(wed, MathUnit::Week, WeekStart::Sunday),
            Some(datetime!(2024-06-02 0:00 UTC))
        );
        let sun = datetime!(2024-06-09 1:00 UTC);
        assert_eq!(
            start_of(sun, MathUnit::Week, WeekStart::Monday),
            Some(datetime!(2024-06-03 0:00 UTC))
        );
        assert_eq!(
            start_of(sun, MathUnit::Week, WeekStart::Sunday),
            Some(datetime!(2024-06-09 0:00 UTC))
        );
    }

    #[test]
    fn test_end_of() {
        let dt = datetime!(2024-08-20 13:14:15.5 +02:00);
        assert_eq!(
            end_of(dt, MathUnit::Quarter, WeekStart::Monday),
            Some(datetime!(2024-09-30 23:59:59.999 +02:00))
        );
        assert_eq!(
            end_of(dt, MathUnit::Second, WeekStart::Monday),
            Some(datetime!(2024-08-20 13:14:15.999 +02:00))
        );
        assert_eq!(
            end_of(dt, MathUnit::Month, WeekStart::Monday),
            Some(datetime!(2024-08-31 23:59:59.999 +02:00))
        );
    }

    #[test]
    fn test_round_fiscal() {
        let dt = datetime!(2024-01-15 12:00 UTC);
        // fiscal year starting in October
        assert_eq!(
            round_fiscal(dt, MathUnit::Year, 9, false),
            Some(datetime!(2023-10-01 0:00 UTC))
        );
        assert_eq!(
            round_fiscal(dt, MathUnit::Year, 9, true),
            Some(datetime!(2024-09-30 23:59:59.999 UTC))
        );
        // quarters starting Jun, Sep, Dec, Mar
        assert_eq!(
            round_fiscal(dt, MathUnit::Quarter, 5, false),
            Some(datetime!(2023-12-01 0:00 UTC))
        );
        assert_eq!(
            round_fiscal(dt, MathUnit::Quarter, 5, true),
            Some(datetime!(2024-02-29 23:59:59.999 UTC))
        );
        assert_eq!(round_fiscal(dt, MathUnit::Day, 5, true), Some(dt));
    }
}
