//! Color theme for console output.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::config::ThemeChoice;
use crate::data::{AvailabilityTier, PriceTier};

/// Color and style theme for the product report.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for the title rule text.
    pub title: Style,
    /// Style for table column headers.
    pub header: Style,
    /// Color for prices above the high threshold.
    pub price_high: Color,
    /// Color for all other prices.
    pub price_low: Color,
    /// Color for critical availability.
    pub critical: Color,
    /// Color for warning availability.
    pub warning: Color,
    /// Color for sufficient availability.
    pub ok: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            title: Style::default().fg(Color::Green),
            header: Style::default().fg(Color::Yellow),
            price_high: Color::Green,
            price_low: Color::Blue,
            critical: Color::Red,
            warning: Color::Yellow,
            ok: Color::Green,
            border: Color::Gray,
            border_type: BorderType::Plain,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            title: Style::default().fg(Color::Green),
            header: Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            price_high: Color::Green,
            price_low: Color::Blue,
            critical: Color::Red,
            warning: Color::LightRed,
            ok: Color::Green,
            border: Color::DarkGray,
            border_type: BorderType::Plain,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolve a configured choice. Detection only runs against a terminal.
    pub fn from_choice(choice: ThemeChoice, is_terminal: bool) -> Self {
        match choice {
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
            ThemeChoice::Auto if is_terminal => Self::auto_detect(),
            ThemeChoice::Auto => Self::dark(),
        }
    }

    pub fn price_style(&self, tier: PriceTier) -> Style {
        match tier {
            PriceTier::High => Style::default().fg(self.price_high),
            PriceTier::Low => Style::default().fg(self.price_low),
        }
    }

    pub fn availability_color(&self, tier: AvailabilityTier) -> Color {
        match tier {
            AvailabilityTier::Critical => self.critical,
            AvailabilityTier::Warning => self.warning,
            AvailabilityTier::Ok => self.ok,
        }
    }

    pub fn availability_style(&self, tier: AvailabilityTier) -> Style {
        Style::default().fg(self.availability_color(tier))
    }
}
