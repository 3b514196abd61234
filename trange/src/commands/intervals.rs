use crate::cli::RangeArgs;
use super::{Context, Output};
use serde::Serialize;
use tracing::{Level, event};
use tr_core::{
    calculate_interval, describe_interval, models::IntervalDescriptor, ms_range_to_time_string,
    round_interval, seconds_to_hms,
};

pub(super) fn calculate(
    context: &Context,
    range: &RangeArgs,
    resolution: f64,
    min: Option<&str>,
) -> anyhow::Result<Output> {
    let range = context.resolve(range)?;
    let values = calculate_interval(&range, resolution, min)?;
    event!(Level::DEBUG, span_ms = %range.span_millis(), resolution, ?values, "picked interval");
    Output::json(&values)
}

// The decomposed interval alongside its total length
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DescribedInterval {
    #[serde(flatten)]
    descriptor: IntervalDescriptor,
    seconds: f64,
    ms: f64,
}

pub(super) fn describe(interval: &str) -> anyhow::Result<Output> {
    let descriptor = describe_interval(interval)?;
    Output::json(&DescribedInterval {
        seconds: descriptor.seconds(),
        ms: descriptor.millis(),
        descriptor,
    })
}

pub(super) fn round(ms: f64) -> Output {
    Output::Text(round_interval(ms).to_string())
}

pub(super) fn hms(seconds: f64) -> Output {
    Output::Text(seconds_to_hms(seconds))
}

pub(super) fn ms_range(ms: f64) -> Output {
    Output::Text(ms_range_to_time_string(ms))
}
