//! Magnification tiers.
//!
//! Each item is assigned a discrete tier from its distance to the hovered
//! item. The tier only selects a class name; the actual scaling is left to
//! whatever styling layer reads the markup.

/// Visual tier of a dock item relative to the hovered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MagnificationTier {
    /// Not near the pointer.
    #[default]
    Base,
    /// Two positions before the hovered item.
    SecondPrev,
    /// Directly before the hovered item.
    Prev,
    /// The hovered item.
    Current,
    /// Directly after the hovered item.
    Next,
    /// Two positions after the hovered item.
    SecondNext,
}

impl MagnificationTier {
    /// All tiers that carry a class name.
    pub const MAGNIFIED: [Self; 5] = [
        Self::SecondPrev,
        Self::Prev,
        Self::Current,
        Self::Next,
        Self::SecondNext,
    ];

    /// Computes the tier of the item at `index` given the hovered index.
    #[must_use]
    pub fn for_index(index: usize, hovered: Option<usize>) -> Self {
        let Some(hovered) = hovered else {
            return Self::Base;
        };

        if index == hovered {
            Self::Current
        } else if hovered.checked_sub(1) == Some(index) {
            Self::Prev
        } else if hovered.checked_add(1) == Some(index) {
            Self::Next
        } else if hovered.checked_sub(2) == Some(index) {
            Self::SecondPrev
        } else if hovered.checked_add(2) == Some(index) {
            Self::SecondNext
        } else {
            Self::Base
        }
    }

    /// Class name for this tier; `None` for the base tier.
    #[must_use]
    pub const fn class_name(&self) -> Option<&'static str> {
        match self {
            Self::Base => None,
            Self::SecondPrev => Some("dock-item-second-prev"),
            Self::Prev => Some("dock-item-prev"),
            Self::Current => Some("dock-item-current"),
            Self::Next => Some("dock-item-next"),
            Self::SecondNext => Some("dock-item-second-next"),
        }
    }

    /// Parses a tier from its class name.
    #[must_use]
    pub fn from_class(class: &str) -> Option<Self> {
        Self::MAGNIFIED
            .into_iter()
            .find(|tier| tier.class_name() == Some(class))
    }

    /// Returns true for the two directly adjacent tiers.
    #[must_use]
    pub const fn is_adjacent(&self) -> bool {
        matches!(self, Self::Prev | Self::Next)
    }

    /// Returns true for the two second-adjacent tiers.
    #[must_use]
    pub const fn is_second_adjacent(&self) -> bool {
        matches!(self, Self::SecondPrev | Self::SecondNext)
    }

    /// Scale step: 0 for base, 1 for second-adjacent, 2 adjacent, 3 current.
    #[must_use]
    pub const fn step(&self) -> u16 {
        match self {
            Self::Base => 0,
            Self::SecondPrev | Self::SecondNext => 1,
            Self::Prev | Self::Next => 2,
            Self::Current => 3,
        }
    }
}
