use super::{Context, Output};
use crate::{CliError, cli::RangeArgs};
use tr_core::{models::RelativeTimeRange, relative_to_time_range, time_range_to_relative};

pub(super) fn convert(context: &Context, range: &RangeArgs) -> anyhow::Result<Output> {
    Output::json(&context.resolve(range)?)
}

pub(super) fn to_relative(context: &Context, range: &RangeArgs) -> anyhow::Result<Output> {
    let range = context.resolve(range)?;
    Output::json(&time_range_to_relative(&range, context.clock.now()))
}

pub(super) fn from_relative(context: &Context, from: i64, to: i64) -> anyhow::Result<Output> {
    let range = relative_to_time_range(&RelativeTimeRange { from, to }, context.clock.now())
        .ok_or(CliError::RelativeRange { from, to })?;
    Output::json(&range)
}
