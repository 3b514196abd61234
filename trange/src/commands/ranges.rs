use crate::cli::RangeArgs;
use super::{Context, Output};
use tracing::{Level, event};
use tr_core::{
    describe_text_range, describe_time_range, describe_time_range_abbreviation,
    is_valid_time_span,
};

pub(super) fn describe(context: &Context, range: &RangeArgs) -> Output {
    let described = describe_time_range(
        &range.raw(),
        Some(&context.time_zone),
        Some(context.quick_ranges.as_slice()),
        &context.math,
        &context.formatter,
    );
    if described.is_empty() {
        event!(Level::WARN, ?range, "relative side could not be evaluated");
    }
    Output::Text(described)
}

pub(super) fn text(expr: &str) -> anyhow::Result<Output> {
    let described = describe_text_range(expr);
    if !described.is_valid() {
        event!(Level::INFO, expr, "unrecognized span");
    }
    Output::json(&described.into_option())
}

pub(super) fn validate(span: &str) -> Output {
    Output::Text(is_valid_time_span(span).to_string())
}

pub(super) fn abbreviation(context: &Context, range: &RangeArgs) -> anyhow::Result<Output> {
    let range = context.resolve(range)?;
    Ok(Output::Text(describe_time_range_abbreviation(
        &range,
        Some(&context.time_zone),
        &context.formatter,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppConfig, cli::parse_side, commands::tests::{NOW, context}};
    use rstest::*;
    use super::Context;
    use tr_core::models::TimeOption;

    fn args(from: &str, to: &str) -> RangeArgs {
        RangeArgs {
            from: parse_side(from).unwrap(),
            to: parse_side(to).unwrap(),
        }
    }

    #[rstest]
    #[case("now-1h", "now", "Last 1 hour")]
    #[case("now-10m", "now", "Last 10 minutes")]
    #[case("now/d", "now/d", "Today")]
    #[case("now-2h/h", "now/h", "now-2h/h to now/h")]
    #[case("2024-06-01T08:00:00Z", "now-1h", "2024-06-01 08:00:00 to an hour ago")]
    #[case("2024-06-01T08:00:00Z", "2024-06-01T09:00:00Z", "2024-06-01 08:00:00 to 2024-06-01 09:00:00")]
    fn test_describe(#[case] from: &str, #[case] to: &str, #[case] expected: &str) {
        assert_eq!(
            describe(&context(), &args(from, to)),
            Output::Text(expected.into())
        );
    }

    #[test]
    fn test_describe_custom_presets() {
        let config = AppConfig {
            quick_ranges: vec![TimeOption::new("now-8h", "now", "Work day")],
            ..Default::default()
        };
        let context = Context::new(&config, Some(NOW), None);
        assert_eq!(
            describe(&context, &args("now-8h", "now")),
            Output::Text("Work day".into())
        );
    }

    #[test]
    fn test_text() {
        assert_eq!(
            text("+1h").unwrap(),
            Output::Json(serde_json::json!({ "from": "now", "to": "now+1h", "display": "Next 1 hour" }))
        );
        let Output::Json(invalid) = text("xyz").unwrap() else {
            panic!("expected json");
        };
        assert_eq!(invalid["invalid"], serde_json::json!(true));
    }

    #[rstest]
    #[case("$var", "true")]
    #[case("5m", "true")]
    #[case("5Q", "false")]
    fn test_validate(#[case] span: &str, #[case] expected: &str) {
        assert_eq!(validate(span), Output::Text(expected.into()));
    }

    #[test]
    fn test_abbreviation() {
        let context = Context::new(&AppConfig::default(), Some(NOW), Some("+03:00".parse().unwrap()));
        assert_eq!(
            abbreviation(&context, &args("now-1h", "now")).unwrap(),
            Output::Text("UTC+03:00".into())
        );
        assert!(abbreviation(&context, &args("someday", "now")).is_err());
    }
}
