use crate::{AppConfig, cli::RangeArgs};
use clap::Subcommand;
use serde::Serialize;
use std::io::Write;
use time::OffsetDateTime;
use tr_core::{
    convert_raw_to_range,
    models::{TimeOption, TimeRange, TimeZone},
};
use tr_datemath::{Clock, DateMathEvaluator, Formatter, ParseError, Parser};

mod intervals;
mod presets;
mod ranges;
mod relative;

/// One subcommand per exposed operation
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Describe a raw range the way a time picker labels it
    Describe {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Describe a shorthand span such as `5m` or `+1h`
    Text {
        /// The shorthand span
        #[arg(allow_hyphen_values = true)]
        expr: String,
    },

    /// Check whether a shorthand span is understood
    Validate {
        /// The shorthand span
        #[arg(allow_hyphen_values = true)]
        span: String,
    },

    /// Print the time zone abbreviation at the start of a range
    Abbrev {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Resolve a raw range into instants
    Convert {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Pick a bucket interval for a range and a number of points
    Interval {
        #[command(flatten)]
        range: RangeArgs,

        /// The number of points to bucket the range into
        #[arg(short, long, default_value_t = 100.0)]
        resolution: f64,

        /// The smallest interval allowed, such as `1m`
        #[arg(short, long)]
        min: Option<String>,
    },

    /// Split an interval string such as `5m` into its unit and count
    DescribeInterval {
        /// The interval string
        #[arg(allow_hyphen_values = true)]
        interval: String,
    },

    /// Snap a raw interval in milliseconds to a bucket
    Round {
        /// The raw interval in milliseconds
        #[arg(allow_negative_numbers = true)]
        ms: f64,
    },

    /// Render seconds as their largest nonzero unit
    Hms {
        /// A number of seconds
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },

    /// Render a span in milliseconds as hours, minutes and seconds
    MsRange {
        /// A span in milliseconds
        #[arg(allow_negative_numbers = true)]
        ms: f64,
    },

    /// Express a range as seconds before now
    ToRelative {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Rebuild a range from seconds before now
    FromRelative {
        /// Seconds between the beginning and now
        #[arg(allow_negative_numbers = true)]
        from: i64,

        /// Seconds between the end and now
        #[arg(allow_negative_numbers = true)]
        to: i64,
    },

    /// List the presets
    Presets {
        /// Only the picker menu, in display order
        #[arg(short, long)]
        quick: bool,
    },
}

impl Commands {
    /// Runs the command
    pub fn evaluate(&self, context: &Context) -> anyhow::Result<Output> {
        match self {
            Self::Describe { range } => Ok(ranges::describe(context, range)),
            Self::Text { expr } => ranges::text(expr),
            Self::Validate { span } => Ok(ranges::validate(span)),
            Self::Abbrev { range } => ranges::abbreviation(context, range),
            Self::Convert { range } => relative::convert(context, range),
            Self::Interval {
                range,
                resolution,
                min,
            } => intervals::calculate(context, range, *resolution, min.as_deref()),
            Self::DescribeInterval { interval } => intervals::describe(interval),
            Self::Round { ms } => Ok(intervals::round(*ms)),
            Self::Hms { seconds } => Ok(intervals::hms(*seconds)),
            Self::MsRange { ms } => Ok(intervals::ms_range(*ms)),
            Self::ToRelative { range } => relative::to_relative(context, range),
            Self::FromRelative { from, to } => relative::from_relative(context, *from, *to),
            Self::Presets { quick } => presets::list(context, *quick),
        }
    }
}

/// Everything a command needs: resolved settings and the adapters built from them
#[derive(Debug, Clone)]
pub struct Context {
    /// The zone to render and round in
    pub time_zone: TimeZone,
    /// The month (0 = January) fiscal years begin in
    pub fiscal_year_start_month: u8,
    /// An optional format description for plain dates
    pub format: Option<String>,
    /// Custom presets consulted before the built-in catalog
    pub quick_ranges: Vec<TimeOption>,
    /// The source of `now`
    pub clock: Clock,
    /// The date-math evaluator
    pub math: DateMathEvaluator,
    /// The instant formatter
    pub formatter: Formatter,
    /// The range-side parser
    pub parser: Parser,
}

impl Context {
    /// Builds the adapters, with command-line overrides taking precedence over `config`
    pub fn new(config: &AppConfig, now: Option<OffsetDateTime>, time_zone: Option<TimeZone>) -> Self {
        let clock = Clock::from(now);
        let math = DateMathEvaluator::new(clock).with_week_start(config.week_start);
        Self {
            time_zone: time_zone.unwrap_or(config.timezone),
            fiscal_year_start_month: config.fiscal_year_start_month,
            format: config.format.clone(),
            quick_ranges: config.quick_ranges.clone(),
            clock,
            math,
            formatter: Formatter::new(clock),
            parser: Parser::new(math),
        }
    }

    /// Resolves both sides of a range, rounding `to` up
    pub fn resolve(&self, range: &RangeArgs) -> Result<TimeRange, ParseError> {
        convert_raw_to_range(
            &range.raw(),
            Some(&self.time_zone),
            self.fiscal_year_start_month,
            self.format.as_deref(),
            &self.parser,
        )
    }
}

/// What a command prints
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// A single line of text
    Text(String),
    /// A JSON document, printed pretty
    Json(serde_json::Value),
}

impl Output {
    /// Wraps any serializable result
    pub fn json(value: &impl Serialize) -> anyhow::Result<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Prints the output followed by a newline
    pub fn write(&self, mut writer: impl Write) -> anyhow::Result<()> {
        match self {
            Self::Text(text) => writeln!(writer, "{text}")?,
            Self::Json(value) => {
                serde_json::to_writer_pretty(&mut writer, value)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use time::macros::datetime;

    pub const NOW: OffsetDateTime = datetime!(2024-06-01 12:00 UTC);

    pub fn context() -> Context {
        Context::new(&AppConfig::default(), Some(NOW), None)
    }

    #[test]
    fn test_write_output() {
        let mut buffer = Vec::new();
        Output::Text("Last 1 hour".into()).write(&mut buffer).unwrap();
        assert_eq!(buffer, b"Last 1 hour\n");

        let mut buffer = Vec::new();
        Output::Json(serde_json::json!({ "a": 1 }))
            .write(&mut buffer)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig {
            timezone: "+01:00".parse().unwrap(),
            ..Default::default()
        };
        let zone: TimeZone = "-03:00".parse().unwrap();
        assert_eq!(Context::new(&config, None, None).time_zone, config.timezone);
        assert_eq!(Context::new(&config, None, Some(zone)).time_zone, zone);
        assert_eq!(Context::new(&config, Some(NOW), None).clock, Clock::Fixed(NOW));
    }
}
