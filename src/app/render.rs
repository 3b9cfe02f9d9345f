//! Rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Clear},
};

use crate::ui::{DockWidget, KeyHint, StatusLine};

use super::App;

/// Key hints shown in the status line.
const HINTS: [KeyHint<'static>; 4] = [
    ("Enter", "Activate"),
    ("p", "Position"),
    ("m", "Magnify"),
    ("q", "Quit"),
];

impl App {
    /// Renders the dock and the status line.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(self.theme.background)), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let tree = self.dock.render(&self.config, &self.resolver);
        let widget = DockWidget::new(&tree, &self.theme);
        frame.render_stateful_widget(widget, chunks[0], &mut *self.last_layout.borrow_mut());

        let status = self.status();
        frame.render_widget(StatusLine::new(status.as_deref(), &HINTS), chunks[1]);
    }
}
