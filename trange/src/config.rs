//! Application configuration management.
//!
//! Settings come from built-in defaults, an optional TOML file and
//! environment variables, in increasing order of precedence.

use crate::{Cli, CliError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{Level, event};
use tr_core::models::{TimeOption, TimeZone};
use tr_datemath::WeekStart;

/// Settings shared by every command
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct AppConfig {
    /// The zone to render instants and round date math in
    #[serde(default)]
    pub timezone: TimeZone,

    /// The month fiscal years begin in (0 = January)
    #[serde(default)]
    pub fiscal_year_start_month: u8,

    /// A format description for plain dates, such as `[day]/[month]/[year]`
    #[serde(default)]
    pub format: Option<String>,

    /// Presets consulted before the built-in catalog
    #[serde(default)]
    pub quick_ranges: Vec<TimeOption>,

    /// The first day of the week when rounding to `w`
    #[serde(default)]
    pub week_start: WeekStart,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern `TRANGE_<KEY>`.
    ///
    /// # Examples
    ///
    /// ```bash
    /// export TRANGE_TIMEZONE="+02:00"
    /// export TRANGE_FISCAL_YEAR_START_MONTH=3
    /// export TRANGE_WEEK_START=sunday
    /// ```
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        Self::load_from(
            cli.config.as_deref(),
            config::Environment::with_prefix("TRANGE"),
        )
    }

    fn load_from(path: Option<&Path>, environment: config::Environment) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path));
            } else {
                return Err(CliError::MissingConfig(path.display().to_string()).into());
            }
        }

        // Override with environment variables
        config = config.add_source(
            environment
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let loaded: Self = config.build()?.try_deserialize()?;
        if loaded.fiscal_year_start_month > 11 {
            return Err(CliError::FiscalMonth(loaded.fiscal_year_start_month).into());
        }
        event!(Level::DEBUG, config = ?loaded, "loaded configuration");
        Ok(loaded)
    }
}
