use super::{Context, Output};
use tr_core::{quick_options, standard_range_options};

// Custom presets first, as they shadow the built-in ones
pub(super) fn list(context: &Context, quick: bool) -> anyhow::Result<Output> {
    let builtin = if quick {
        quick_options()
    } else {
        standard_range_options()
    };
    let options: Vec<_> = context.quick_ranges.iter().chain(builtin).collect();
    Output::json(&options)
}
