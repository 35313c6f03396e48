//! Report assembly: title, table and chart in one pass.

use std::io::Write;

use crate::data::{AvailabilityBreakdown, Product, Thresholds};
use crate::error::Result;
use crate::ui::{chart, common, output, table, Theme};

/// Title shown on the rule above the table.
pub const REPORT_TITLE: &str = "Products";

/// Where and how the report is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    /// Available terminal width in columns.
    pub width: u16,
    /// Requested chart width; clamped to `width`.
    pub chart_width: u16,
    /// Emit ANSI colors.
    pub color: bool,
}

/// A generated product list ready to be displayed.
pub struct Showcase {
    products: Vec<Product>,
    thresholds: Thresholds,
    theme: Theme,
}

impl Showcase {
    pub fn new(products: Vec<Product>, theme: Theme) -> Self {
        Self {
            products,
            thresholds: Thresholds::default(),
            theme,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn breakdown(&self) -> AvailabilityBreakdown {
        AvailabilityBreakdown::from_products(&self.products, &self.thresholds)
    }

    /// Write the title rule, product table and availability chart.
    pub fn render<W: Write>(&self, out: &mut W, options: OutputOptions) -> Result<()> {
        let rule = common::render_title_rule(REPORT_TITLE, &self.theme, options.width);
        output::write_buffer(out, &rule, options.color)?;
        writeln!(out)?;

        let table = table::render(&self.products, &self.thresholds, &self.theme, options.width);
        output::write_buffer(out, &table, options.color)?;

        let chart_width = options.chart_width.min(options.width);
        let chart = chart::render(&self.breakdown(), &self.theme, chart_width);
        output::write_buffer(out, &chart, options.color)?;

        Ok(())
    }
}
