//! Key input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::dock::ItemEvent;

use super::App;

impl App {
    /// Handles a key event.
    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => {
                self.quit();
            }
            (_, KeyCode::Enter) => {
                if let Some(index) = self.dock.hovered() {
                    self.activate(index, ItemEvent::from(key));
                }
            }
            (_, KeyCode::Char('p')) => self.cycle_position(),
            (_, KeyCode::Char('m')) => self.toggle_magnification(),
            _ => {}
        }
    }
}
