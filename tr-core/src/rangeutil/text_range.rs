use super::{catalog, units};
use crate::models::{TextRange, TimeOption};

/// Describes a shorthand range expression such as `5m`, `+1h` or `now/d`.
///
/// An expression without `now` is completed first: `5m` becomes `now-5m` (the
/// last five minutes) and `+5m` becomes `now+5m` (the next five minutes). The
/// completed expression is paired with `now` and looked up in the standard
/// catalog; a match is returned as-is. Otherwise the expression must begin with
/// `now`, a sign, a count and a unit letter to be described as "Last N units" or
/// "Next N units". Anything else is [`TextRange::Invalid`] with a verbatim
/// `"<from> to <to>"` label.
pub fn describe_text_range(expr: &str) -> TextRange {
    let is_last = !expr.starts_with('+');
    let expr = if expr.contains("now") {
        expr.to_owned()
    } else if is_last {
        format!("now-{expr}")
    } else {
        format!("now{expr}")
    };

    if let Some(option) =
        catalog::find_range_in_options(&expr, "now", catalog::standard_range_options())
    {
        return TextRange::Valid(option.clone());
    }

    let option = if is_last {
        TimeOption::new(expr.as_str(), "now", "")
    } else {
        TimeOption::new("now", expr.as_str(), "")
    };

    let described = scan_relative(&expr).and_then(|(amount, unit)| {
        units::span(unit).map(|span| {
            let direction = if is_last { "Last" } else { "Next" };
            let plural = if amount > 1 { "s" } else { "" };
            (
                format!("{direction} {amount} {}{plural}", span.display),
                span.section,
            )
        })
    });

    match described {
        Some((display, section)) => TextRange::Valid(TimeOption {
            display,
            section,
            ..option
        }),
        None => TextRange::Invalid(TimeOption {
            display: format!("{} to {}", option.from, option.to),
            invalid: true,
            ..option
        }),
    }
}

/// Whether a shorthand span would be understood by [`describe_text_range`].
///
/// Template variable references (`$var`, `+$var`) are always accepted, since
/// they are only substituted at evaluation time.
pub fn is_valid_time_span(value: &str) -> bool {
    if value.starts_with('$') || value.starts_with("+$") {
        return true;
    }
    describe_text_range(value).is_valid()
}

// Recognizes the prefix `now[-+]<digits><word char>`, returning the count and
// the character following it. Trailing input (like `/d`) is ignored.
fn scan_relative(expr: &str) -> Option<(u64, char)> {
    let rest = expr.strip_prefix("now")?;
    let rest = rest.strip_prefix(['-', '+'])?;

    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let amount = rest[..digits].parse().ok()?;

    let unit = rest[digits..].chars().next()?;
    (unit.is_ascii_alphanumeric() || unit == '_').then_some((amount, unit))
}
