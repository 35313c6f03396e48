//! Common components shared across the report.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use crate::ui::Theme;

/// Rule segment drawn before a left-aligned title.
const RULE_LEAD: &str = "──";

/// Render a horizontal rule with a left-aligned title, e.g. `── Products ────`.
pub fn render_title_rule(title: &str, theme: &Theme, width: u16) -> Buffer {
    let border_style = Style::default().fg(theme.border);
    let heading = Line::from(vec![
        Span::styled(RULE_LEAD, border_style),
        Span::styled(format!(" {} ", title), theme.title),
    ]);
    let rule = Block::default()
        .borders(Borders::TOP)
        .border_type(theme.border_type)
        .border_style(border_style)
        .title(heading.left_aligned());

    let mut buffer = Buffer::empty(Rect::new(0, 0, width, 1));
    rule.render(buffer.area, &mut buffer);
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::table::tests::find_text;

    #[test]
    fn test_title_rule_spans_width() {
        let theme = Theme::dark();
        let buffer = render_title_rule("Products", &theme, 40);

        assert_eq!(buffer.area.height, 1);
        let (x, y) = find_text(&buffer, "Products").unwrap();
        assert_eq!((x, y), (3, 0));
        assert_eq!(Some(buffer[(x, y)].fg), theme.title.fg);
        assert_eq!(buffer[(0, 0)].symbol(), "─");
        assert_eq!(buffer[(1, 0)].symbol(), "─");
        assert_eq!(buffer[(0, 0)].fg, theme.border);
        assert_eq!(buffer[(2, 0)].symbol(), " ");
        assert_eq!(buffer[(39, 0)].symbol(), "─");
    }
}
