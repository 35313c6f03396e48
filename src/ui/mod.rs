//! Console rendering using ratatui widgets.
//!
//! Each part of the report renders into its own off-screen buffer, which
//! [`output::write_buffer`] then prints as ANSI text.
//!
//! ## Submodules
//!
//! - [`common`]: Title rule shown above the table
//! - [`table`]: Product table with tier-colored price and availability cells
//! - [`chart`]: Horizontal availability bar chart
//! - [`output`]: Buffer-to-terminal serialization
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Report Layout
//!
//! ```text
//! ── Products ──────────────────────────────
//!
//! ┌──────────────────────────────────────┐
//! │ Name      Price     Availability     │
//! │ Chair     123.45     0.8123          │
//! └──────────────────────────────────────┘
//!                Availability
//! Low    ██████ 25.00%
//! Medium ██████ 25.00%
//! OK     ████████████ 50.00%
//! ```

pub mod chart;
pub mod common;
pub mod output;
pub mod table;
pub mod theme;

pub use theme::Theme;
