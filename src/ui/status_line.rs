//! Status line widget.
//!
//! One row: the last activity message on the left, key hints on the right.
//! Hints that do not fit are dropped from the left.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// A key hint (key text, description).
pub type KeyHint<'a> = (&'a str, &'a str);

/// Divider between hints.
const DIVIDER: &str = " \u{2502} ";

/// Status line widget.
pub struct StatusLine<'a> {
    /// Message shown on the left.
    message: Option<&'a str>,
    /// Key hints shown on the right.
    hints: &'a [KeyHint<'a>],
}

impl<'a> StatusLine<'a> {
    /// Creates a status line.
    #[must_use]
    pub fn new(message: Option<&'a str>, hints: &'a [KeyHint<'a>]) -> Self {
        Self { message, hints }
    }

    fn hint_width(hint: &KeyHint<'_>) -> usize {
        // " key " + " desc"
        hint.0.width() + 2 + hint.1.width() + 1
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let bar = Style::default().bg(Color::Black).fg(Color::Gray);
        let row = Rect::new(area.x, area.y, area.width, 1);
        buf.set_style(row, bar);
        for x in row.left()..row.right() {
            if let Some(cell) = buf.cell_mut((x, row.y)) {
                cell.set_char(' ');
            }
        }

        let available = usize::from(area.width);

        // Keep the rightmost hints that fit in half the row
        let budget = available / 2;
        let mut used = 0;
        let mut first = self.hints.len();
        for (i, hint) in self.hints.iter().enumerate().rev() {
            let divider = if used > 0 { DIVIDER.width() } else { 0 };
            let needed = used + divider + Self::hint_width(hint);
            if needed > budget {
                break;
            }
            used = needed;
            first = i;
        }

        if let Some(message) = self.message {
            let max = available.saturating_sub(used + 2);
            buf.set_stringn(row.x + 1, row.y, message, max, bar.fg(Color::White));
        }

        let Ok(used_u16) = u16::try_from(used) else {
            return;
        };
        let mut x = row.right().saturating_sub(used_u16);
        let badge = Style::default()
            .bg(Color::DarkGray)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        for (i, (key, description)) in self.hints[first..].iter().enumerate() {
            if i > 0 {
                let (next_x, _) =
                    buf.set_stringn(x, row.y, DIVIDER, usize::MAX, bar.fg(Color::DarkGray));
                x = next_x;
            }
            let (next_x, _) = buf.set_stringn(x, row.y, format!(" {key} "), usize::MAX, badge);
            let (next_x, _) =
                buf.set_stringn(next_x, row.y, format!(" {description}"), usize::MAX, bar);
            x = next_x;
        }
    }
}
