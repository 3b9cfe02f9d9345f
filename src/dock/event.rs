//! Interaction events passed to item commands.

use crossterm::event::{KeyEvent, MouseEvent};

use super::model::DockItem;

/// Input that triggered an item activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEvent {
    /// Pointer click.
    Mouse(MouseEvent),
    /// Keyboard activation.
    Key(KeyEvent),
    /// Activation requested programmatically.
    Synthetic,
}

/// An activation event with a cancellable default action.
///
/// The default action of a dock item is following its link; the dock always
/// cancels it and leaves navigation to the item command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemEvent {
    source: InteractionEvent,
    default_prevented: bool,
}

impl ItemEvent {
    /// Wraps an input event.
    #[must_use]
    pub const fn new(source: InteractionEvent) -> Self {
        Self {
            source,
            default_prevented: false,
        }
    }

    /// Cancels the default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns true once the default action was cancelled.
    #[must_use]
    pub const fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// The underlying input event.
    #[must_use]
    pub const fn source(&self) -> &InteractionEvent {
        &self.source
    }
}

impl From<MouseEvent> for ItemEvent {
    fn from(event: MouseEvent) -> Self {
        Self::new(InteractionEvent::Mouse(event))
    }
}

impl From<KeyEvent> for ItemEvent {
    fn from(event: KeyEvent) -> Self {
        Self::new(InteractionEvent::Key(event))
    }
}

/// Payload handed to an item command.
#[derive(Debug, Clone, Copy)]
pub struct ItemCommandEvent<'a> {
    /// Event that activated the item.
    pub original_event: &'a ItemEvent,
    /// The activated item.
    pub item: &'a DockItem,
}
