//! Layered run settings.
//!
//! Built-in defaults are overlaid by `SHOWCASE_*` environment variables,
//! which are in turn overlaid by command-line flags.

use clap::ValueEnum;
use config::{Config, ConfigBuilder, ConfigError, Environment};
use serde::Deserialize;

use crate::error::Result;
use crate::ui::table::MAX_ROWS;

/// Environment variable prefix (`SHOWCASE_COUNT`, `SHOWCASE_SEED`, ...).
pub const ENV_PREFIX: &str = "SHOWCASE";

/// Number of products generated when nothing else is configured.
pub const DEFAULT_COUNT: usize = 100;

/// Width of the availability chart in columns.
pub const DEFAULT_CHART_WIDTH: u16 = 60;

/// Which color theme to render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Detect from the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeChoice::Auto => "auto",
            ThemeChoice::Dark => "dark",
            ThemeChoice::Light => "light",
        }
    }
}

/// Whether ANSI colors are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        }
    }

    /// Resolve against whether the output is a terminal.
    pub fn enabled(&self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Values supplied on the command line. `None` leaves lower layers in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub count: Option<usize>,
    pub seed: Option<u64>,
    pub theme: Option<ThemeChoice>,
    pub color: Option<ColorChoice>,
    pub chart_width: Option<u16>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub count: usize,
    pub seed: Option<u64>,
    pub theme: ThemeChoice,
    pub color: ColorChoice,
    pub chart_width: u16,
}

impl Settings {
    /// Resolve settings from defaults, the process environment and `overrides`.
    pub fn load(overrides: &Overrides) -> Result<Self> {
        Self::from_layers(Environment::with_prefix(ENV_PREFIX), overrides)
    }

    /// Resolve settings from defaults, the given environment source and `overrides`.
    pub fn from_layers(env: Environment, overrides: &Overrides) -> Result<Self> {
        let builder = Self::defaults()?.add_source(env.try_parsing(true));
        let config = Self::apply_overrides(builder, overrides)?.build()?;
        let settings: Self = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the report cannot display in full.
    fn validate(&self) -> Result<()> {
        if self.count > MAX_ROWS {
            return Err(ConfigError::Message(format!(
                "count {} exceeds the table limit of {} products",
                self.count, MAX_ROWS
            ))
            .into());
        }
        if self.chart_width == 0 {
            return Err(ConfigError::Message("chart_width must be at least 1".to_string()).into());
        }
        Ok(())
    }

    fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>> {
        Ok(Config::builder()
            .set_default("count", DEFAULT_COUNT as u64)?
            .set_default("theme", ThemeChoice::default().as_str())?
            .set_default("color", ColorChoice::default().as_str())?
            .set_default("chart_width", DEFAULT_CHART_WIDTH as u64)?)
    }

    fn apply_overrides(
        builder: ConfigBuilder<config::builder::DefaultState>,
        overrides: &Overrides,
    ) -> Result<ConfigBuilder<config::builder::DefaultState>> {
        Ok(builder
            .set_override_option("count", overrides.count.map(|c| c as u64))?
            .set_override_option("seed", overrides.seed)?
            .set_override_option("theme", overrides.theme.map(|t| t.as_str()))?
            .set_override_option("color", overrides.color.map(|c| c.as_str()))?
            .set_override_option("chart_width", overrides.chart_width.map(u64::from))?)
    }
}
