//! Dock theme.
//!
//! Terminal colors used when drawing the dock. Inline `color` and
//! `background` style properties on the dock root override the theme.

pub mod colors;

pub use colors::parse_color;

use std::collections::BTreeMap;

use ratatui::style::Color;

use crate::dock::MagnificationTier;

/// Colors for the dock widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockTheme {
    /// Dock background.
    pub background: Color,
    /// Icon text color.
    pub foreground: Color,
    /// Border color of base-tier items.
    pub border: Color,
    /// Border color of the hovered item.
    pub current: Color,
    /// Border color of directly adjacent items.
    pub adjacent: Color,
    /// Border color of second-adjacent items.
    pub second_adjacent: Color,
    /// Icon and border color of disabled items.
    pub disabled: Color,
    /// Header and footer text color.
    pub caption: Color,
    /// Tooltip foreground.
    pub tooltip_fg: Color,
    /// Tooltip background.
    pub tooltip_bg: Color,
}

impl Default for DockTheme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(30, 30, 30),
            foreground: Color::Rgb(212, 212, 212),
            border: Color::DarkGray,
            current: Color::Cyan,
            adjacent: Color::Rgb(86, 156, 214),
            second_adjacent: Color::Rgb(90, 90, 90),
            disabled: Color::Rgb(80, 80, 80),
            caption: Color::Gray,
            tooltip_fg: Color::Black,
            tooltip_bg: Color::Rgb(220, 220, 170),
        }
    }
}

impl DockTheme {
    /// Border color for an item of the given tier.
    #[must_use]
    pub const fn border_for(&self, tier: MagnificationTier) -> Color {
        match tier {
            MagnificationTier::Base => self.border,
            MagnificationTier::SecondPrev | MagnificationTier::SecondNext => self.second_adjacent,
            MagnificationTier::Prev | MagnificationTier::Next => self.adjacent,
            MagnificationTier::Current => self.current,
        }
    }

    /// Applies inline style overrides (`color`, `background`).
    ///
    /// Unparseable values are ignored.
    #[must_use]
    pub fn with_style(mut self, style: &BTreeMap<String, String>) -> Self {
        if let Some(color) = style.get("color").and_then(|v| parse_color(v)) {
            self.foreground = color;
        }
        if let Some(color) = style.get("background").and_then(|v| parse_color(v)) {
            self.background = color;
        }
        self
    }

    /// Sets a color by its setting key.
    ///
    /// Returns false for unknown keys or unparseable values.
    pub fn set_color(&mut self, key: &str, value: &str) -> bool {
        let Some(color) = parse_color(value) else {
            return false;
        };
        let slot = match key {
            "background" => &mut self.background,
            "foreground" => &mut self.foreground,
            "border" => &mut self.border,
            "current" => &mut self.current,
            "adjacent" => &mut self.adjacent,
            "second_adjacent" => &mut self.second_adjacent,
            "disabled" => &mut self.disabled,
            "caption" => &mut self.caption,
            "tooltip_fg" => &mut self.tooltip_fg,
            "tooltip_bg" => &mut self.tooltip_bg,
            _ => return false,
        };
        *slot = color;
        true
    }
}
