//! Availability bar chart rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Direction, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Widget},
};

use crate::data::{AvailabilityBreakdown, AvailabilityTier};
use crate::ui::Theme;

const TITLE: &str = "Availability";

/// Bar values are stored in hundredths of a percent.
const PERCENT_SCALE: f64 = 100.0;

/// Title row plus one row per bucket.
const CHART_HEIGHT: u16 = 1 + AvailabilityTier::ALL.len() as u16;

/// Render the availability chart, `width` columns wide.
///
/// Bars are scaled against the largest bucket. An empty breakdown draws
/// three empty bars.
pub fn render(breakdown: &AvailabilityBreakdown, theme: &Theme, width: u16) -> Buffer {
    let bars: Vec<Bar> = AvailabilityTier::ALL
        .iter()
        .map(|&tier| {
            let percentage = breakdown.percentage(tier);
            let color = theme.availability_color(tier);
            Bar::default()
                .label(Line::from(tier.bucket_label()))
                .value(bar_value(percentage))
                .text_value(format!("{:.2}%", percentage))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(color).add_modifier(Modifier::REVERSED))
        })
        .collect();

    let largest = bars_max(breakdown);

    tracing::debug!(
        low = breakdown.low,
        medium = breakdown.medium,
        ok = breakdown.ok,
        "rendering availability chart"
    );

    let chart = BarChart::default()
        .block(Block::default().title(Line::from(TITLE).centered()))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(largest)
        .data(BarGroup::default().bars(&bars));

    let mut buffer = Buffer::empty(Rect::new(0, 0, width, CHART_HEIGHT));
    chart.render(buffer.area, &mut buffer);
    buffer
}

/// Largest bar value, never below 1 so the scale stays defined.
fn bars_max(breakdown: &AvailabilityBreakdown) -> u64 {
    AvailabilityTier::ALL
        .iter()
        .map(|&tier| bar_value(breakdown.percentage(tier)))
        .max()
        .unwrap_or(0)
        .max(1)
}

fn bar_value(percentage: f64) -> u64 {
    (percentage * PERCENT_SCALE).round() as u64
}
