//! Product table rendering.
//!
//! Displays one row per product with the price and availability cells
//! colored by tier.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Row, Table, Widget},
};

use crate::data::{Product, Thresholds};
use crate::ui::Theme;

const HEADERS: [&str; 3] = ["Name", "Price", "Availability"];
const COLUMN_SPACING: u16 = 3;
/// Borders plus one column of padding on each side.
const FRAME_WIDTH: u16 = 4;
/// Top border, header row, bottom border.
const FRAME_HEIGHT: u16 = 3;

/// Most products a single table can hold; the buffer height is a `u16`.
pub const MAX_ROWS: usize = (u16::MAX - FRAME_HEIGHT) as usize;

/// Render the product table into a buffer at most `max_width` wide.
///
/// An empty product list renders the header row only. Callers keep
/// `products` within [`MAX_ROWS`].
pub fn render(
    products: &[Product],
    thresholds: &Thresholds,
    theme: &Theme,
    max_width: u16,
) -> Buffer {
    let prices: Vec<String> = products.iter().map(|p| p.price().to_string()).collect();
    let availabilities: Vec<String> =
        products.iter().map(|p| p.availability().to_string()).collect();

    let widths = [
        column_width(HEADERS[0], products.iter().map(|p| p.name())),
        column_width(HEADERS[1], prices.iter().map(String::as_str)),
        column_width(HEADERS[2], availabilities.iter().map(String::as_str)),
    ];

    let header = Row::new(vec![
        Cell::from(HEADERS[0]),
        Cell::from(Line::from(HEADERS[1]).centered()),
        Cell::from(Line::from(HEADERS[2]).centered()),
    ])
    .style(theme.header);

    let rows: Vec<Row> = products
        .iter()
        .zip(prices)
        .zip(availabilities)
        .map(|((product, price), availability)| {
            let price_style = theme.price_style(thresholds.price_tier(product.price()));
            let availability_style =
                theme.availability_style(thresholds.availability_tier(product.availability()));

            Row::new(vec![
                Cell::from(product.name().to_string()),
                Cell::from(Line::from(price).centered()).style(price_style),
                Cell::from(Line::from(availability).centered()).style(availability_style),
            ])
        })
        .collect();

    let content_width: u16 = widths.iter().sum::<u16>() + COLUMN_SPACING * 2 + FRAME_WIDTH;
    let width = content_width.min(max_width);
    let height = FRAME_HEIGHT.saturating_add(u16::try_from(rows.len()).unwrap_or(u16::MAX));

    tracing::debug!(rows = rows.len(), width, "rendering product table");

    let table = Table::new(rows, widths.map(Constraint::Length))
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .padding(Padding::horizontal(1)),
        );

    let mut buffer = Buffer::empty(Rect::new(0, 0, width, height));
    table.render(buffer.area, &mut buffer);
    buffer
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> u16 {
    let widest = values.map(|v| v.chars().count()).max().unwrap_or(0).max(header.len());
    u16::try_from(widest).unwrap_or(u16::MAX)
}

#[cfg(test)]
pub(crate) mod tests {
    use ratatui::style::Color;
    use rust_decimal::Decimal;

    use super::*;

    /// Locate the first occurrence of ASCII `text` in the buffer.
    pub(crate) fn find_text(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
        let area = buffer.area;
        let chars: Vec<String> = text.chars().map(String::from).collect();
        let len = chars.len() as u16;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right().saturating_sub(len.saturating_sub(1)) {
                if chars
                    .iter()
                    .enumerate()
                    .all(|(i, c)| buffer[(x + i as u16, y)].symbol() == c.as_str())
                {
                    return Some((x, y));
                }
            }
        }
        None
    }

    fn fg_at(buffer: &Buffer, text: &str) -> Color {
        let (x, y) = find_text(buffer, text).unwrap_or_else(|| panic!("{} not rendered", text));
        buffer[(x, y)].fg
    }

    fn render_default(products: &[Product]) -> Buffer {
        render(products, &Thresholds::default(), &Theme::dark(), 120)
    }

    #[test]
    fn test_empty_renders_header_only() {
        let buffer = render_default(&[]);
        assert_eq!(buffer.area.height, 3);
        assert!(find_text(&buffer, "Name").is_some());
        assert!(find_text(&buffer, "Price").is_some());
        assert!(find_text(&buffer, "Availability").is_some());
    }

    #[test]
    fn test_header_uses_accent_color() {
        let buffer = render_default(&[]);
        let theme = Theme::dark();
        assert_eq!(Some(fg_at(&buffer, "Name")), theme.header.fg);
        assert_eq!(Some(fg_at(&buffer, "Availability")), theme.header.fg);
    }

    #[test]
    fn test_one_row_per_product() {
        let products = vec![
            Product::new("Chair", Decimal::new(1_050, 2), 0.1),
            Product::new("Table", Decimal::new(99_999, 2), 0.7),
        ];
        let buffer = render_default(&products);
        assert_eq!(buffer.area.height, 5);
        assert_eq!(find_text(&buffer, "Chair").map(|(_, y)| y), Some(2));
        assert_eq!(find_text(&buffer, "Table").map(|(_, y)| y), Some(3));
    }

    #[test]
    fn test_price_tier_colors() {
        let theme = Theme::dark();
        let products = vec![
            Product::new("Low", Decimal::new(50_000, 2), 0.9),
            Product::new("High", Decimal::new(50_001, 2), 0.9),
        ];
        let buffer = render_default(&products);
        assert_eq!(fg_at(&buffer, "500.00"), theme.price_low);
        assert_eq!(fg_at(&buffer, "500.01"), theme.price_high);
    }

    #[test]
    fn test_availability_tier_colors() {
        let theme = Theme::dark();
        let products = vec![
            Product::new("A", Decimal::ONE, 0.125),
            Product::new("B", Decimal::ONE, 0.25),
            Product::new("C", Decimal::ONE, 0.5),
        ];
        let buffer = render_default(&products);
        assert_eq!(fg_at(&buffer, "0.125"), theme.critical);
        assert_eq!(fg_at(&buffer, "0.25"), theme.warning);
        assert_eq!(fg_at(&buffer, "0.5"), theme.ok);
    }

    #[test]
    fn test_name_left_price_centered() {
        let products = vec![Product::new("Soap", Decimal::new(1_000, 2), 0.75)];
        let buffer = render_default(&products);

        let (name_x, row) = find_text(&buffer, "Soap").unwrap();
        let (header_x, _) = find_text(&buffer, "Name").unwrap();
        assert_eq!(name_x, header_x);

        // "Price" and "10.00" share the column width, so centering puts them at the same start.
        let (price_x, price_row) = find_text(&buffer, "10.00").unwrap();
        let (price_header_x, _) = find_text(&buffer, "Price").unwrap();
        assert_eq!(price_row, row);
        assert_eq!(price_x, price_header_x);
    }

    #[test]
    fn test_max_rows_fit_buffer() {
        let products = vec![Product::new("Ball", Decimal::ONE, 0.5); 3];
        let buffer = render_default(&products);
        assert_eq!(usize::from(buffer.area.height), 3 + usize::from(FRAME_HEIGHT));
        assert_eq!(MAX_ROWS + usize::from(FRAME_HEIGHT), usize::from(u16::MAX));
    }

    #[test]
    fn test_width_is_clamped() {
        let products = vec![Product::new("Keyboard", Decimal::ONE, 0.3)];
        let buffer = render(&products, &Thresholds::default(), &Theme::dark(), 20);
        assert_eq!(buffer.area.width, 20);
    }
}
