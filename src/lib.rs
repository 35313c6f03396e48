//! # product-showcase
//!
//! Generate synthetic product records and render them to the console as a
//! colorized table and an availability bar chart.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  ┌───────────┐    ┌───────────┐    ┌──────────┐    ┌────────┐ │
//! │  │  config   │───▶│   data    │───▶│    ui    │───▶│ stdout │ │
//! │  │ (Settings)│    │(generate, │    │ (table,  │    │ (ANSI) │ │
//! │  └───────────┘    │ classify) │    │  chart)  │    └────────┘ │
//! │                   └───────────┘    └──────────┘               │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`config`]**: Layered [`Settings`] from defaults, environment and flags
//! - **[`data`]**: [`Product`] records, the seeded [`ProductGenerator`], tier
//!   [`Thresholds`] and the chart's [`AvailabilityBreakdown`]
//! - **[`ui`]**: ratatui widgets drawn off-screen and printed as ANSI text
//! - **[`app`]**: [`Showcase`], which puts the report together
//!
//! ## Usage
//!
//! ```
//! use product_showcase::{OutputOptions, ProductGenerator, Showcase, Theme};
//!
//! let products = ProductGenerator::new(42).generate(10).unwrap();
//! let showcase = Showcase::new(products, Theme::dark());
//!
//! let mut out = Vec::new();
//! let options = OutputOptions { width: 80, chart_width: 60, color: false };
//! showcase.render(&mut out, options).unwrap();
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod ui;

pub use app::{OutputOptions, Showcase};
pub use config::{ColorChoice, Overrides, Settings, ThemeChoice};
pub use data::{
    AvailabilityBreakdown, AvailabilityTier, PriceTier, Product, ProductBuilder, ProductGenerator,
    Thresholds,
};
pub use error::{Result, ShowcaseError};
pub use ui::Theme;
