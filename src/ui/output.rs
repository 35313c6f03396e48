//! Serialize an off-screen ratatui [`Buffer`] to a writer.
//!
//! Widgets are drawn into a buffer sized to their content and then printed
//! line by line, so the report scrolls like ordinary console output instead
//! of taking over the screen.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as CColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use ratatui::buffer::{Buffer, Cell};
use ratatui::style::{Color, Modifier};

/// Write every row of `buffer`, trimming trailing blank cells.
///
/// With `color` disabled only the cell symbols are written.
pub fn write_buffer<W: Write>(out: &mut W, buffer: &Buffer, color: bool) -> io::Result<()> {
    let area = buffer.area;
    for y in area.top()..area.bottom() {
        let Some(last) = (area.left()..area.right()).rev().find(|&x| !is_blank(&buffer[(x, y)]))
        else {
            queue!(out, Print('\n'))?;
            continue;
        };

        let mut current: Option<(Color, Color, Modifier)> = None;
        for x in area.left()..=last {
            let cell = &buffer[(x, y)];
            if cell.skip {
                continue;
            }
            if color {
                let style = (cell.fg, cell.bg, cell.modifier);
                if current != Some(style) {
                    apply_style(out, cell)?;
                    current = Some(style);
                }
            }
            queue!(out, Print(cell.symbol()))?;
        }

        if color && current.is_some() {
            queue!(out, SetAttribute(Attribute::Reset))?;
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}

fn is_blank(cell: &Cell) -> bool {
    cell.symbol() == " " && cell.bg == Color::Reset
}

fn apply_style<W: Write>(out: &mut W, cell: &Cell) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    if cell.modifier.contains(Modifier::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if cell.modifier.contains(Modifier::DIM) {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if cell.modifier.contains(Modifier::REVERSED) {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    if cell.fg != Color::Reset {
        queue!(out, SetForegroundColor(to_crossterm(cell.fg)))?;
    }
    if cell.bg != Color::Reset {
        queue!(out, SetBackgroundColor(to_crossterm(cell.bg)))?;
    }
    Ok(())
}

/// Map a ratatui color onto the crossterm palette.
fn to_crossterm(color: Color) -> CColor {
    match color {
        Color::Reset => CColor::Reset,
        Color::Black => CColor::Black,
        Color::Red => CColor::DarkRed,
        Color::Green => CColor::DarkGreen,
        Color::Yellow => CColor::DarkYellow,
        Color::Blue => CColor::DarkBlue,
        Color::Magenta => CColor::DarkMagenta,
        Color::Cyan => CColor::DarkCyan,
        Color::Gray => CColor::Grey,
        Color::DarkGray => CColor::DarkGrey,
        Color::LightRed => CColor::Red,
        Color::LightGreen => CColor::Green,
        Color::LightYellow => CColor::Yellow,
        Color::LightBlue => CColor::Blue,
        Color::LightMagenta => CColor::Magenta,
        Color::LightCyan => CColor::Cyan,
        Color::White => CColor::White,
        Color::Rgb(r, g, b) => CColor::Rgb { r, g, b },
        Color::Indexed(i) => CColor::AnsiValue(i),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    use super::*;

    fn render(buffer: &Buffer, color: bool) -> String {
        let mut out = Vec::new();
        write_buffer(&mut out, buffer, color).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_output_trims_trailing_blanks() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 10, 3));
        buffer.set_string(0, 0, "abc", Style::default());
        buffer.set_string(2, 2, "xy", Style::default());

        assert_eq!(render(&buffer, false), "abc\n\n  xy\n");
    }

    #[test]
    fn test_colored_output_wraps_styled_run() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 4, 1));
        buffer.set_string(0, 0, "ok", Style::default().fg(Color::Green));

        let text = render(&buffer, true);
        assert!(text.contains("ok"));
        assert!(text.starts_with("\u{1b}["));
        assert!(text.ends_with("\u{1b}[0m\n"));
    }

    #[test]
    fn test_plain_output_has_no_escapes() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 4, 1));
        buffer.set_string(0, 0, "ok", Style::default().fg(Color::Green));

        assert_eq!(render(&buffer, false), "ok\n");
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(to_crossterm(Color::Red), CColor::DarkRed);
        assert_eq!(to_crossterm(Color::LightRed), CColor::Red);
        assert_eq!(to_crossterm(Color::Rgb(1, 2, 3)), CColor::Rgb { r: 1, g: 2, b: 3 });
    }
}
