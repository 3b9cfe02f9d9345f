//! Mouse input handling.
//!
//! Pointer motion is turned into the dock's enter/leave actions using the
//! layout recorded by the last render. Motion over gaps inside the list keeps
//! the current hover. Items drawn as disabled ignore clicks.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::dock::{DockAction, ItemEvent};

use super::App;

/// What the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerTarget {
    Item(usize),
    ListGap,
    Outside,
}

impl App {
    /// Handles mouse events.
    pub(super) fn handle_mouse(&mut self, event: MouseEvent) {
        let target = self.pointer_target(event.column, event.row);

        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.track_hover(target, event),
            MouseEventKind::Down(MouseButton::Left) => {
                self.track_hover(target, event);
                if let PointerTarget::Item(index) = target {
                    if self.last_layout.borrow().is_disabled(index) {
                        debug!("Ignoring click on disabled item {}", index);
                        return;
                    }
                    self.activate(index, ItemEvent::from(event));
                }
            }
            _ => {}
        }
    }

    fn pointer_target(&self, x: u16, y: u16) -> PointerTarget {
        let layout = self.last_layout.borrow();
        if let Some(index) = layout.item_at(x, y) {
            PointerTarget::Item(index)
        } else if layout.contains_list(x, y) {
            PointerTarget::ListGap
        } else {
            PointerTarget::Outside
        }
    }

    fn track_hover(&mut self, target: PointerTarget, event: MouseEvent) {
        let action = match target {
            PointerTarget::Item(index) if self.dock.hovered() != Some(index) => {
                DockAction::ItemMouseEnter(index)
            }
            PointerTarget::Outside if self.dock.hovered().is_some() => DockAction::ListMouseLeave,
            _ => return,
        };
        let mut item_event = ItemEvent::from(event);
        self.dock.dispatch(action, &mut item_event, &self.config);
    }
}
