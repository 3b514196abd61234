#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod cli;
pub use cli::{Cli, RangeArgs};

mod commands;
pub use commands::{Commands, Context, Output};

mod config;
pub use config::AppConfig;

/// Failures specific to the command line
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// The configured fiscal year start is not a month index
    #[error("fiscal_year_start_month must be between 0 and 11, got {0}")]
    FiscalMonth(u8),
    /// A config file was requested but is not there
    #[error("Config file {0} does not exist")]
    MissingConfig(String),
    /// A range side given on the command line cannot be used
    #[error("invalid range side {0:?}")]
    RangeSide(String),
    /// Offsets that land outside the representable instants
    #[error("offsets {from}s and {to}s before now are out of range")]
    RelativeRange {
        /// Seconds between the beginning and now
        from: i64,
        /// Seconds between the end and now
        to: i64,
    },
}
