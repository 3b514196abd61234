use crate::{
    error::ParseError,
    math::{DateMathEvaluator, parse_absolute},
};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, Time, format_description::BorrowedFormatItem,
};
use tracing::{Level, event};
use tr_core::{
    models::{DateOrString, TimeZone},
    ports::{DateMath, DateTimeParser, ParseOptions},
};

/// Resolves one side of a raw range into an instant.
///
/// Instants are moved into the requested zone. Expressions mentioning `now` or
/// anchored with `||` are evaluated as date math; an expression mentioning
/// `now` that cannot be evaluated resolves to the current instant. Anything
/// else is a plain date, read with the caller's format description when one is
/// given and with the built-in absolute formats otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Parser {
    /// The evaluator for date-math expressions
    pub math: DateMathEvaluator,
}

impl Parser {
    /// A parser evaluating expressions with `math`
    pub fn new(math: DateMathEvaluator) -> Self {
        Self { math }
    }

    fn parse_math(&self, expr: &str, options: &ParseOptions) -> Result<OffsetDateTime, ParseError> {
        let zone = options.time_zone.unwrap_or_default();
        let parsed = self.math.parse(
            expr,
            options.round_up,
            Some(&zone),
            options.fiscal_year_start_month,
        );
        match parsed {
            Some(dt) => Ok(dt),
            None if expr.contains("now") => {
                event!(Level::WARN, expr, "unresolvable date math, using the current time");
                Ok(zone.apply(self.math.clock.now()))
            }
            None => Err(ParseError::InvalidDate(expr.to_owned())),
        }
    }
}

impl DateTimeParser for Parser {
    type Error = ParseError;

    fn parse(
        &self,
        value: &DateOrString,
        options: &ParseOptions,
    ) -> Result<OffsetDateTime, Self::Error> {
        let zone = options.time_zone.unwrap_or_default();
        let expr = match value {
            DateOrString::DateTime(dt) => return Ok(zone.apply(*dt)),
            DateOrString::Expr(expr) => expr.as_str(),
        };

        if expr.contains("now") || expr.contains("||") {
            return self.parse_math(expr, options);
        }

        let parsed = match options.format.as_deref() {
            Some(format) => {
                let items = time::format_description::parse(format).map_err(|source| {
                    ParseError::Format {
                        format: format.to_owned(),
                        source,
                    }
                })?;
                parse_with(expr, &items, zone)
            }
            None => parse_absolute(expr, zone),
        };

        parsed.ok_or_else(|| {
            event!(Level::DEBUG, expr, format = ?options.format, "not a date");
            ParseError::InvalidDate(expr.to_owned())
        })
    }
}

// Reads `text` with a caller-supplied description, which may or may not carry
// an offset or a time of day
fn parse_with(text: &str, items: &[BorrowedFormatItem<'_>], zone: TimeZone) -> Option<OffsetDateTime> {
    if let Ok(dt) = OffsetDateTime::parse(text, items) {
        return Some(zone.apply(dt));
    }
    let offset = zone.offset();
    if let Ok(dt) = PrimitiveDateTime::parse(text, items) {
        return Some(dt.assume_offset(offset));
    }
    let date = Date::parse(text, items).ok()?;
    Some(PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_offset(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Clock;
    use time::macros::{datetime, offset};

    const NOW: OffsetDateTime = datetime!(2024-06-05 15:30 UTC);

    fn parser() -> Parser {
        Parser::new(DateMathEvaluator::new(Clock::Fixed(NOW)))
    }

    #[test]
    fn test_instant_moves_into_zone() {
        let options = ParseOptions {
            time_zone: Some(TimeZone::Fixed(offset!(+2))),
            ..Default::default()
        };
        let parsed = parser().parse(&NOW.into(), &options).unwrap();
        assert_eq!(parsed, NOW);
        assert_eq!(parsed.offset(), offset!(+2));
    }

    #[test]
    fn test_broken_now_falls_back_to_now() {
        let parsed = parser().parse(&"now-5x".into(), &ParseOptions::default());
        assert_eq!(parsed.unwrap(), NOW);
    }

    #[test]
    fn test_broken_anchor_is_an_error() {
        let parsed = parser().parse(&"soon||+1d".into(), &ParseOptions::default());
        assert!(matches!(parsed, Err(ParseError::InvalidDate(_))));
    }

    #[test]
    fn test_custom_format() {
        let options = ParseOptions {
            format: Some("[day].[month].[year]".into()),
            ..Default::default()
        };
        assert_eq!(
            parser().parse(&"05.06.2024".into(), &options).unwrap(),
            datetime!(2024-06-05 0:00 UTC)
        );
        assert!(parser().parse(&"2024-06-05".into(), &options).is_err());
    }

    #[test]
    fn test_bad_format_description() {
        let options = ParseOptions {
            format: Some("[nonsense]".into()),
            ..Default::default()
        };
        let err = parser().parse(&"2024-06-05".into(), &options).unwrap_err();
        assert!(matches!(err, ParseError::Format { .. }));
    }
}
