//! Hover state owned by a dock instance.

use super::magnification::MagnificationTier;

/// Index of the item under the pointer, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    hovered: Option<usize>,
}

impl HoverState {
    /// State with nothing hovered.
    #[must_use]
    pub const fn new() -> Self {
        Self { hovered: None }
    }

    /// Pointer entered the item at `index`.
    pub fn enter(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    /// Pointer left the item list.
    pub fn reset(&mut self) {
        self.hovered = None;
    }

    /// Currently hovered index.
    #[must_use]
    pub const fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Tier of the item at `index` under this state.
    #[must_use]
    pub fn tier_for(&self, index: usize) -> MagnificationTier {
        MagnificationTier::for_index(index, self.hovered)
    }
}
