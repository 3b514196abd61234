use crate::{
    calendar::{self, MathUnit, WeekStart},
    clock::Clock,
};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, Time, format_description::well_known::Rfc3339,
    macros::format_description,
};
use tracing::{Level, event};
use tr_core::{models::TimeZone, ports::DateMath};

// Operations never read digits past this position of the math string
const MAX_DIGIT_POSITION: usize = 10;

/// Evaluates date-math expressions.
///
/// An expression is anchored at `now`, at an absolute date followed by `||`, or
/// is a bare absolute date. The anchor is followed by operations:
///
/// * `+N<unit>` and `-N<unit>` add or subtract `N` units (`N` defaults to 1)
/// * `/<unit>` rounds to the start of the unit, or to its last millisecond when
///   rounding up; `/fy` and `/fQ` round to the fiscal year or quarter
///
/// Units are `y Q M w d h m s`. Whitespace is ignored. Rounding happens in the
/// requested time zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateMathEvaluator {
    /// The source of `now`
    pub clock: Clock,
    /// The first day of the week when rounding to `w`
    pub week_start: WeekStart,
}

impl DateMathEvaluator {
    /// An evaluator reading `now` from `clock` with Monday weeks
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            week_start: WeekStart::default(),
        }
    }

    /// Use a different week start
    pub fn with_week_start(self, week_start: WeekStart) -> Self {
        Self { week_start, ..self }
    }

    /// Applies the operations in `math` to `time`
    pub fn apply(
        &self,
        math: &str,
        time: OffsetDateTime,
        round_up: bool,
        fiscal_year_start_month: u8,
    ) -> Option<OffsetDateTime> {
        let ops: Vec<char> = math.chars().filter(|c| !c.is_whitespace()).collect();
        let mut time = time;
        let mut i = 0;

        while i < ops.len() {
            let op = ops[i];
            i += 1;
            if !matches!(op, '/' | '+' | '-') {
                event!(Level::DEBUG, math, op = %op, "unknown date math operator");
                return None;
            }

            let digits_from = i;
            while ops.get(i).is_some_and(char::is_ascii_digit) {
                i += 1;
                if i > MAX_DIGIT_POSITION {
                    event!(Level::DEBUG, math, "date math amount too long");
                    return None;
                }
            }
            let amount: i64 = if i == digits_from {
                1
            } else {
                ops[digits_from..i].iter().collect::<String>().parse().ok()?
            };

            if op == '/' && amount != 1 {
                event!(Level::DEBUG, math, amount, "date math can only round to a single unit");
                return None;
            }

            let mut code = ops.get(i).copied();
            i += 1;
            let fiscal = code == Some('f');
            if fiscal {
                code = ops.get(i).copied();
                i += 1;
            }

            let Some(unit) = code.and_then(MathUnit::from_code) else {
                event!(Level::DEBUG, math, unit = ?code, "unknown date math unit");
                return None;
            };

            let next = match op {
                '/' if fiscal => {
                    calendar::round_fiscal(time, unit, fiscal_year_start_month, round_up)
                }
                '/' if round_up => calendar::end_of(time, unit, self.week_start),
                '/' => calendar::start_of(time, unit, self.week_start),
                '+' => calendar::add(time, amount, unit),
                _ => calendar::add(time, -amount, unit),
            };
            time = match next {
                Some(next) => next,
                None => {
                    event!(Level::DEBUG, math, "date math result out of range");
                    return None;
                }
            };
        }

        Some(time)
    }
}

impl DateMath for DateMathEvaluator {
    fn parse(
        &self,
        text: &str,
        round_up: bool,
        time_zone: Option<&TimeZone>,
        fiscal_year_start_month: u8,
    ) -> Option<OffsetDateTime> {
        if text.is_empty() {
            return None;
        }
        let zone = time_zone.copied().unwrap_or_default();

        let (anchor, math) = match text.strip_prefix("now") {
            Some(math) => (zone.apply(self.clock.now()), math),
            None => {
                let (date, math) = text.split_once("||").unwrap_or((text, ""));
                let Some(anchor) = parse_absolute(date, zone) else {
                    event!(Level::DEBUG, text, "not a date");
                    return None;
                };
                (anchor, math)
            }
        };

        if math.is_empty() {
            return Some(anchor);
        }
        self.apply(math, anchor, round_up, fiscal_year_start_month)
    }
}

/// Parses an absolute date: RFC 3339, `YYYY-MM-DD HH:MM:SS` (or with a `T`),
/// `YYYY-MM-DD HH:MM`, `YYYY-MM-DD`, or integer epoch milliseconds.
///
/// Dates without an offset are read as wall-clock time in `zone`.
pub(crate) fn parse_absolute(text: &str, zone: TimeZone) -> Option<OffsetDateTime> {
    let text = text.trim();
    let digits = text.strip_prefix('-').unwrap_or(text);
    // four digits or fewer read as a year, never as a timestamp
    if text.len() > 4 && digits.bytes().all(|b| b.is_ascii_digit()) {
        let millis: i128 = text.parse().ok()?;
        let dt = OffsetDateTime::from_unix_timestamp_nanos(millis.checked_mul(1_000_000)?).ok()?;
        return Some(zone.apply(dt));
    }

    if let Ok(dt) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(zone.apply(dt));
    }

    let offset = zone.offset();
    let local = [
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    ];
    for description in local {
        if let Ok(dt) = PrimitiveDateTime::parse(text, description) {
            return Some(dt.assume_offset(offset));
        }
    }

    let date = Date::parse(text, format_description!("[year]-[month]-[day]")).ok()?;
    Some(PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_offset(offset))
}
