//! Command-line interface definition and parsing.

use crate::{AppConfig, CliError, Commands, Context, Output};
use clap::{Args, Parser};
use std::path::PathBuf;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::{Level, event};
use tr_core::models::{DateOrString, RawTimeRange, TimeZone};

/// Describe, resolve and bucket time ranges.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, env = "TRANGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Evaluate `now` at this RFC 3339 instant instead of the system clock.
    #[arg(long, global = true, value_parser = parse_instant)]
    pub now: Option<OffsetDateTime>,

    /// Override the configured time zone (`utc` or an offset like `+02:00`).
    #[arg(short = 'z', long, global = true)]
    pub timezone: Option<TimeZone>,

    /// The operation to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse command-line arguments, exiting with usage on error.
    pub fn import() -> Self {
        Self::parse()
    }

    /// Runs the subcommand against the loaded configuration
    pub fn evaluate(&self, config: &AppConfig) -> anyhow::Result<Output> {
        let context = Context::new(config, self.now, self.timezone);
        event!(Level::DEBUG, command = ?self.command, "evaluating");
        self.command.evaluate(&context)
    }
}

/// The two sides of a raw range.
///
/// Each side is an RFC 3339 instant, epoch milliseconds, or any other text
/// (a date-math expression or a plain date).
#[derive(Args, Debug, Clone)]
pub struct RangeArgs {
    /// The beginning of the range
    #[arg(value_parser = parse_side, allow_hyphen_values = true)]
    pub from: DateOrString,

    /// The end of the range
    #[arg(value_parser = parse_side, allow_hyphen_values = true)]
    pub to: DateOrString,
}

impl RangeArgs {
    /// The raw range these arguments describe
    pub fn raw(&self) -> RawTimeRange {
        RawTimeRange {
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

fn parse_instant(value: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(value, &Rfc3339)
}

/// Reads a range side as given on the command line
pub fn parse_side(value: &str) -> Result<DateOrString, CliError> {
    if let Ok(dt) = parse_instant(value) {
        return Ok(DateOrString::DateTime(dt));
    }
    let is_millis = value.len() > 4
        && value
            .strip_prefix('-')
            .unwrap_or(value)
            .bytes()
            .all(|b| b.is_ascii_digit());
    if is_millis {
        let dt = value
            .parse::<i128>()
            .ok()
            .and_then(|millis| millis.checked_mul(1_000_000))
            .and_then(|nanos| OffsetDateTime::from_unix_timestamp_nanos(nanos).ok())
            .ok_or_else(|| CliError::RangeSide(value.to_owned()))?;
        return Ok(DateOrString::DateTime(dt));
    }
    Ok(DateOrString::Expr(value.to_owned()))
}
