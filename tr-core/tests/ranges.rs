use rstest::*;
use time::{Duration, OffsetDateTime, macros::datetime};
use tr_core::{
    BASE_RANGE_OPTIONS, HIDDEN_RANGE_OPTIONS, convert_raw_to_range, describe_text_range,
    describe_time_range, describe_time_range_abbreviation, is_valid_time_span,
    models::{DateOrString, RawTimeRange, RelativeTimeRange, TextRange, TimeOption, TimeRange, TimeZone},
    ports::{DateFormatter, DateMath, DateTimeParser, ParseOptions},
    relative_to_time_range, standard_range_options, time_range_to_relative,
};

// Resolves only `now` and `now-<N>h`, anchored at a fixed instant
struct FixedMath(OffsetDateTime);

impl DateMath for FixedMath {
    fn parse(
        &self,
        text: &str,
        _round_up: bool,
        _time_zone: Option<&TimeZone>,
        _fiscal_year_start_month: u8,
    ) -> Option<OffsetDateTime> {
        if text == "now" {
            return Some(self.0);
        }
        let hours: i64 = text.strip_prefix("now-")?.strip_suffix('h')?.parse().ok()?;
        Some(self.0 - Duration::hours(hours))
    }
}

struct PlainFormatter;

impl DateFormatter for PlainFormatter {
    fn format(&self, dt: OffsetDateTime, time_zone: Option<&TimeZone>) -> String {
        let dt = time_zone.copied().unwrap_or_default().apply(dt);
        format!(
            "{} {:02}:{:02}:{:02}",
            dt.date(),
            dt.hour(),
            dt.minute(),
            dt.second()
        )
    }

    fn format_time_ago(&self, dt: OffsetDateTime, _time_zone: Option<&TimeZone>) -> String {
        format!("ago({})", dt.unix_timestamp())
    }

    fn time_zone_abbreviation(&self, _dt: OffsetDateTime, time_zone: Option<&TimeZone>) -> String {
        match time_zone {
            Some(zone @ TimeZone::Fixed(_)) => format!("UTC{zone}"),
            _ => "UTC".into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("cannot resolve {0}")]
struct Unresolvable(String);

// Resolves expressions through `FixedMath` and passes instants through
struct FixedParser(FixedMath);

impl DateTimeParser for FixedParser {
    type Error = Unresolvable;

    fn parse(
        &self,
        value: &DateOrString,
        options: &ParseOptions,
    ) -> Result<OffsetDateTime, Self::Error> {
        match value {
            DateOrString::DateTime(dt) => Ok(*dt),
            DateOrString::Expr(expr) if expr == "2024-06-01" => {
                Ok(datetime!(2024-06-01 0:00 UTC))
            }
            DateOrString::Expr(expr) => self
                .0
                .parse(expr, options.round_up, options.time_zone.as_ref(), 0)
                .ok_or_else(|| Unresolvable(expr.clone())),
        }
    }
}

const NOW: OffsetDateTime = datetime!(2024-06-01 12:00 UTC);

fn describe(range: &RawTimeRange) -> String {
    describe_time_range(range, None, None, &FixedMath(NOW), &PlainFormatter)
}

#[test]
fn every_catalog_entry_describes_as_its_label() {
    for option in standard_range_options() {
        let range = RawTimeRange::new(option.from.as_str(), option.to.as_str());
        assert_eq!(describe(&range), option.display);
    }
    assert_eq!(
        standard_range_options().len(),
        BASE_RANGE_OPTIONS.len() + HIDDEN_RANGE_OPTIONS.len()
    );
}

#[test]
fn custom_quick_ranges_take_precedence() {
    let custom = vec![
        TimeOption::new("now-1h", "now", "Past hour"),
        TimeOption::new("now-8h", "now", "Work day"),
    ];
    let describe = |from: &str, to: &str| {
        describe_time_range(
            &RawTimeRange::new(from, to),
            None,
            Some(&custom),
            &FixedMath(NOW),
            &PlainFormatter,
        )
    };
    assert_eq!(describe("now-1h", "now"), "Past hour");
    assert_eq!(describe("now-8h", "now"), "Work day");
    assert_eq!(describe("now-6h", "now"), "Last 6 hours");
}

#[test]
fn semantic_equivalents_are_not_catalog_matches() {
    assert_eq!(describe(&RawTimeRange::new("now-60m", "now")), "Last 60 minutes");
    assert_eq!(
        describe(&RawTimeRange::new("now-60m", "now-5m")),
        "now-60m to now-5m"
    );
}

#[test]
fn both_sides_absolute() {
    let range = RawTimeRange::new(
        datetime!(2024-01-01 10:00 UTC),
        datetime!(2024-01-01 11:30 UTC),
    );
    assert_eq!(describe(&range), "2024-01-01 10:00:00 to 2024-01-01 11:30:00");

    let zone: TimeZone = "+02:00".parse().unwrap();
    let zoned = describe_time_range(
        &range,
        Some(&zone),
        None,
        &FixedMath(NOW),
        &PlainFormatter,
    );
    assert_eq!(zoned, "2024-01-01 12:00:00 to 2024-01-01 13:30:00");
}

#[test]
fn one_side_absolute() {
    let from = datetime!(2024-06-01 9:00 UTC);
    let to_ago = (NOW - Duration::hours(1)).unix_timestamp();
    assert_eq!(
        describe(&RawTimeRange::new(from, "now-1h")),
        format!("2024-06-01 09:00:00 to ago({to_ago})")
    );

    let from_ago = (NOW - Duration::hours(6)).unix_timestamp();
    assert_eq!(
        describe(&RawTimeRange::new("now-6h", datetime!(2024-06-01 11:00 UTC))),
        format!("ago({from_ago}) to 2024-06-01 11:00:00")
    );
}

#[test]
fn unresolvable_relative_side_is_empty() {
    let from = datetime!(2024-06-01 9:00 UTC);
    assert_eq!(describe(&RawTimeRange::new(from, "tomorrow")), "");
    assert_eq!(describe(&RawTimeRange::new("yesterday", from)), "");
}

#[test]
fn verbatim_fallback() {
    assert_eq!(
        describe(&RawTimeRange::new("now-2h/h", "now/h")),
        "now-2h/h to now/h"
    );
    assert_eq!(describe(&RawTimeRange::new("garbage", "now")), "now-garbage to now");
}

#[test]
fn describe_text_range_last_five_minutes() {
    let described = describe_text_range("5m");
    assert!(described.is_valid());
    assert_eq!(
        described.into_option(),
        TimeOption::new("now-5m", "now", "Last 5 minutes")
    );
}

#[test]
fn describe_text_range_next_hour() {
    let described = describe_text_range("+1h");
    assert_eq!(
        described,
        TextRange::Valid(TimeOption::new("now", "now+1h", "Next 1 hour"))
    );
}

#[rstest]
#[case("3d", "now-3d", "now", "Last 3 days")]
#[case("1w", "now-1w", "now", "Last 1 week")]
#[case("2M", "now-2M", "now", "Last 2 months")]
#[case("1s", "now-1s", "now", "Last 1 second")]
#[case("+3h", "now", "now+3h", "Next 3 hours")]
#[case("+10y", "now", "now+10y", "Next 10 years")]
#[case("now-45m", "now-45m", "now", "Last 45 minutes")]
#[case("now-1d/d", "now-1d/d", "now", "Last 1 day")]
#[case("1h", "now-1h", "now", "Last 1 hour")]
#[case("d", "now-d", "now", "now-d to now")]
#[case("now/w", "now/w", "now", "This week so far")]
fn describe_text_range_cases(
    #[case] expr: &str,
    #[case] from: &str,
    #[case] to: &str,
    #[case] display: &str,
) {
    let option = describe_text_range(expr).into_option();
    assert_eq!(option.from, from);
    assert_eq!(option.to, to);
    assert_eq!(option.display, display);
}

#[rstest]
#[case("xyz", "now-xyz to now")]
#[case("5x", "now-5x to now")]
#[case("5Q", "now-5Q to now")]
#[case("+abc", "now to now+abc")]
#[case("now", "now to now")]
fn describe_text_range_invalid(#[case] expr: &str, #[case] display: &str) {
    let described = describe_text_range(expr);
    assert!(!described.is_valid());
    assert_eq!(described.display(), display);
    assert!(described.into_option().invalid);
}

#[rstest]
#[case("$interval", true)]
#[case("+$offset", true)]
#[case("$", true)]
#[case("5m", true)]
#[case("+2d", true)]
#[case("now-1h", true)]
#[case("xyz", false)]
#[case("5Q", false)]
#[case("", false)]
#[case("a$b", false)]
fn is_valid_time_span_cases(#[case] value: &str, #[case] valid: bool) {
    assert_eq!(is_valid_time_span(value), valid);
}

#[test]
fn abbreviation_uses_from() {
    let range = TimeRange::absolute(NOW, NOW);
    let zone: TimeZone = "+03:00".parse().unwrap();
    assert_eq!(describe_time_range_abbreviation(&range, None, &PlainFormatter), "UTC");
    assert_eq!(
        describe_time_range_abbreviation(&range, Some(&zone), &PlainFormatter),
        "UTC+03:00"
    );
}

#[test]
fn convert_keeps_math_strings() {
    let parser = FixedParser(FixedMath(NOW));
    let raw = RawTimeRange::new("now-6h", "now");
    let range = convert_raw_to_range(&raw, None, 0, None, &parser).unwrap();

    assert_eq!(range.from, NOW - Duration::hours(6));
    assert_eq!(range.to, NOW);
    assert_eq!(range.raw, raw);
}

#[test]
fn convert_resolves_plain_dates() {
    let parser = FixedParser(FixedMath(NOW));
    let instant = datetime!(2024-05-31 0:00 UTC);
    let raw = RawTimeRange::new("2024-06-01", instant);
    let range = convert_raw_to_range(&raw, None, 0, None, &parser).unwrap();

    assert_eq!(range.from, datetime!(2024-06-01 0:00 UTC));
    assert_eq!(
        range.raw,
        RawTimeRange::new(datetime!(2024-06-01 0:00 UTC), instant)
    );
}

#[test]
fn convert_propagates_parser_errors() {
    let parser = FixedParser(FixedMath(NOW));
    let raw = RawTimeRange::new("now-6h", "later");
    assert_eq!(
        convert_raw_to_range(&raw, None, 0, None, &parser)
            .unwrap_err()
            .to_string(),
        "cannot resolve later"
    );
}

#[rstest]
#[case(datetime!(2024-06-01 11:00 UTC), datetime!(2024-06-01 12:00 UTC))]
#[case(datetime!(2023-01-01 0:00 UTC), datetime!(2023-12-31 23:59:59 UTC))]
#[case(datetime!(2024-06-01 12:30 UTC), datetime!(2024-06-02 0:00 UTC))]
#[case(datetime!(1999-12-31 23:59:59 -05:00), datetime!(2000-01-01 0:00 +01:00))]
fn relative_round_trip(#[case] from: OffsetDateTime, #[case] to: OffsetDateTime) {
    let range = TimeRange::absolute(from, to);
    let restored = relative_to_time_range(&time_range_to_relative(&range, NOW), NOW).unwrap();
    assert_eq!(restored.from, range.from);
    assert_eq!(restored.to, range.to);
}

#[test]
fn relative_serializes_as_seconds() {
    let relative = time_range_to_relative(
        &TimeRange::absolute(NOW - Duration::minutes(10), NOW),
        NOW,
    );
    assert_eq!(relative, RelativeTimeRange { from: 600, to: 0 });
    assert_eq!(
        serde_json::to_string(&relative).unwrap(),
        r#"{"from":600,"to":0}"#
    );
}

#[test]
fn text_range_option_serializes_without_defaults() {
    let valid = serde_json::to_value(describe_text_range("5m").into_option()).unwrap();
    assert_eq!(
        valid,
        serde_json::json!({ "from": "now-5m", "to": "now", "display": "Last 5 minutes" })
    );

    let invalid = serde_json::to_value(describe_text_range("xyz").into_option()).unwrap();
    assert_eq!(invalid["invalid"], serde_json::json!(true));
}
