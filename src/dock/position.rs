//! Dock placement.

/// Screen edge the dock is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DockPosition {
    /// Horizontal dock along the top edge.
    Top,
    /// Horizontal dock along the bottom edge.
    #[default]
    Bottom,
    /// Vertical dock along the left edge.
    Left,
    /// Vertical dock along the right edge.
    Right,
}

impl DockPosition {
    /// All positions in cycling order.
    pub const ALL: [Self; 4] = [Self::Bottom, Self::Left, Self::Top, Self::Right];

    /// Parse position from string.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Get position name as string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Class name applied to the dock root.
    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::Top => "dock-top",
            Self::Bottom => "dock-bottom",
            Self::Left => "dock-left",
            Self::Right => "dock-right",
        }
    }

    /// Parses a position from its root class name.
    #[must_use]
    pub fn from_class(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.class_name() == class)
    }

    /// Returns true when items are stacked top to bottom.
    #[must_use]
    pub const fn is_vertical(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Next position in cycling order.
    #[must_use]
    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}
