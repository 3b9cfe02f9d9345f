//! Terminal dock widget.
//!
//! Draws a rendered dock markup tree. Everything visual is derived from the
//! class names in the tree: the position class picks the edge, the
//! magnification class enables growth, and the tier class of each item picks
//! its size and border color.

use std::collections::BTreeMap;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::dock::{DockPosition, Element, MagnificationTier, Node};
use crate::theme::DockTheme;

/// Item width on horizontal docks.
pub const ITEM_WIDTH: u16 = 5;

/// Item height on vertical docks.
pub const ITEM_HEIGHT: u16 = 3;

/// Gap between items on horizontal docks.
pub const ITEM_GAP: u16 = 1;

/// Base item extent across the dock (rows on horizontal docks).
pub const BASE_ROWS: u16 = 3;

/// Base item extent across the dock (columns on vertical docks).
pub const BASE_COLUMNS: u16 = 5;

/// Hit-test geometry of the last render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockLayout {
    /// Area covered by the item list at full magnification.
    pub list_area: Rect,
    /// Area of each item, by index.
    pub item_areas: Vec<Rect>,
    /// Disabled flag of each item, by index.
    pub disabled: Vec<bool>,
}

impl DockLayout {
    /// Index of the item under the point.
    #[must_use]
    pub fn item_at(&self, x: u16, y: u16) -> Option<usize> {
        self.item_areas
            .iter()
            .position(|area| contains(*area, x, y))
    }

    /// Returns true if the point is inside the list area.
    #[must_use]
    pub fn contains_list(&self, x: u16, y: u16) -> bool {
        contains(self.list_area, x, y)
    }

    /// Returns true if the item at `index` is disabled.
    #[must_use]
    pub fn is_disabled(&self, index: usize) -> bool {
        self.disabled.get(index).copied().unwrap_or(false)
    }
}

/// Checks if a point is within an area.
fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Item data read back from the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ItemView {
    tier: MagnificationTier,
    disabled: bool,
    icon: String,
    label: Option<String>,
}

/// Dock data read back from the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DockView {
    position: DockPosition,
    magnification: bool,
    style: BTreeMap<String, String>,
    header: Option<String>,
    footer: Option<String>,
    items: Vec<ItemView>,
}

impl DockView {
    fn from_tree(tree: &Node) -> Option<Self> {
        let root = tree.as_element().filter(|e| e.has_class("dock"))?;

        let position = root
            .classes
            .iter()
            .find_map(|class| DockPosition::from_class(class))
            .unwrap_or_default();

        let items = tree
            .find_by_class("dock-list")
            .map(|list| {
                list.child_elements()
                    .filter(|e| e.has_class("dock-item"))
                    .map(ItemView::from_element)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            position,
            magnification: root.has_class("dock-magnification"),
            style: root.style.clone(),
            header: caption(tree, "dock-header"),
            footer: caption(tree, "dock-footer"),
            items,
        })
    }
}

impl ItemView {
    fn from_element(element: &Element) -> Self {
        let node = Node::Element(element.clone());

        let tier = element
            .classes
            .iter()
            .find_map(|class| MagnificationTier::from_class(class))
            .unwrap_or_default();

        let icon = match node.find_by_class("dock-action-icon") {
            Some(marker) => marker
                .classes
                .iter()
                .filter(|class| class.as_str() != "dock-action-icon")
                .cloned()
                .collect::<Vec<_>>()
                .join(" "),
            None => node.text_content(),
        };

        Self {
            tier,
            disabled: node
                .find_by_class("dock-action")
                .is_some_and(|action| action.has_class("disabled")),
            icon: icon.trim().to_string(),
            label: node.find_attribute("tooltip").map(str::to_string),
        }
    }
}

fn caption(tree: &Node, class: &str) -> Option<String> {
    tree.find_by_class(class)
        .map(|e| Node::Element(e.clone()).text_content())
        .filter(|text| !text.trim().is_empty())
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Computed geometry for a dock view.
struct Geometry {
    layout: DockLayout,
    shelf: Rect,
    header_at: Option<(u16, u16)>,
    footer_at: Option<(u16, u16)>,
}

/// Terminal dock widget over a rendered markup tree.
pub struct DockWidget<'a> {
    /// Rendered dock markup.
    tree: &'a Node,
    /// Base colors.
    theme: &'a DockTheme,
}

impl<'a> DockWidget<'a> {
    /// Creates a widget for a rendered dock.
    #[must_use]
    pub fn new(tree: &'a Node, theme: &'a DockTheme) -> Self {
        Self { tree, theme }
    }

    /// Computes the hit-test layout the widget would draw in `area`.
    #[must_use]
    pub fn layout(&self, area: Rect) -> DockLayout {
        DockView::from_tree(self.tree)
            .map(|view| geometry(&view, area).layout)
            .unwrap_or_default()
    }
}

impl StatefulWidget for DockWidget<'_> {
    type State = DockLayout;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        *state = DockLayout::default();
        let area = area.intersection(buf.area);
        if area.width == 0 || area.height == 0 {
            return;
        }
        let Some(view) = DockView::from_tree(self.tree) else {
            return;
        };

        let theme = self.theme.clone().with_style(&view.style);
        let geometry = geometry(&view, area);

        buf.set_style(geometry.shelf, Style::default().bg(theme.background));

        let caption_style = Style::default().fg(theme.caption).bg(theme.background);
        if let (Some((x, y)), Some(text)) = (geometry.header_at, view.header.as_deref()) {
            draw_text(buf, area, x, y, text, caption_style);
        }
        if let (Some((x, y)), Some(text)) = (geometry.footer_at, view.footer.as_deref()) {
            draw_text(buf, area, x, y, text, caption_style);
        }

        for (item, rect) in view.items.iter().zip(&geometry.layout.item_areas) {
            draw_item(buf, *rect, item, &theme);
        }

        if let Some((index, item)) = view
            .items
            .iter()
            .enumerate()
            .find(|(_, item)| item.tier == MagnificationTier::Current)
        {
            if let (Some(label), Some(rect)) = (item.label.as_deref(), geometry.layout.item_areas.get(index)) {
                draw_tooltip(buf, area, *rect, label, view.position, &theme);
            }
        }

        *state = geometry.layout;
    }
}

fn geometry(view: &DockView, area: Rect) -> Geometry {
    if view.position.is_vertical() {
        vertical_geometry(view, area)
    } else {
        horizontal_geometry(view, area)
    }
}

fn item_extent(view: &DockView, tier: MagnificationTier, base: u16, per_step: u16) -> u16 {
    if view.magnification {
        base + tier.step() * per_step
    } else {
        base
    }
}

fn horizontal_geometry(view: &DockView, area: Rect) -> Geometry {
    let count = u16::try_from(view.items.len()).unwrap_or(u16::MAX);
    let cross_max = item_extent(view, MagnificationTier::Current, BASE_ROWS, 1).min(area.height);

    let header_w = view.header.as_deref().map_or(0, text_width);
    let footer_w = view.footer.as_deref().map_or(0, text_width);
    let list_w = count
        .saturating_mul(ITEM_WIDTH)
        .saturating_add(count.saturating_sub(1).saturating_mul(ITEM_GAP))
        .min(area.width);
    let header_span = if header_w > 0 { header_w.saturating_add(ITEM_GAP) } else { 0 };
    let footer_span = if footer_w > 0 { footer_w.saturating_add(ITEM_GAP) } else { 0 };
    let main_len = header_span.saturating_add(list_w).saturating_add(footer_span);

    let start_x = area.x + area.width.saturating_sub(main_len) / 2;
    let list_x = start_x.saturating_add(header_span);
    let band_y = match view.position {
        DockPosition::Top => area.y,
        _ => area.bottom().saturating_sub(cross_max),
    };
    let base_row = match view.position {
        DockPosition::Top => area.y + BASE_ROWS.min(area.height) / 2,
        _ => area.bottom().saturating_sub(BASE_ROWS.min(area.height) / 2 + 1),
    };

    let mut layout = DockLayout {
        list_area: Rect::new(list_x, band_y, list_w, cross_max).intersection(area),
        ..DockLayout::default()
    };

    for (i, item) in view.items.iter().enumerate() {
        let offset = u16::try_from(i).unwrap_or(u16::MAX).saturating_mul(ITEM_WIDTH + ITEM_GAP);
        let x = list_x.saturating_add(offset);
        let extent = item_extent(view, item.tier, BASE_ROWS, 1).min(area.height);
        let y = match view.position {
            DockPosition::Top => area.y,
            _ => area.bottom().saturating_sub(extent),
        };
        layout
            .item_areas
            .push(Rect::new(x, y, ITEM_WIDTH, extent).intersection(area));
        layout.disabled.push(item.disabled);
    }

    let shelf_rows = BASE_ROWS.min(area.height);
    let shelf_y = match view.position {
        DockPosition::Top => area.y,
        _ => area.bottom().saturating_sub(shelf_rows),
    };

    Geometry {
        layout,
        shelf: Rect::new(start_x, shelf_y, main_len, shelf_rows).intersection(area),
        header_at: (header_w > 0).then_some((start_x, base_row)),
        footer_at: (footer_w > 0).then_some((list_x.saturating_add(list_w + ITEM_GAP), base_row)),
    }
}

fn vertical_geometry(view: &DockView, area: Rect) -> Geometry {
    let count = u16::try_from(view.items.len()).unwrap_or(u16::MAX);
    let cross_max = item_extent(view, MagnificationTier::Current, BASE_COLUMNS, 2).min(area.width);

    let header_h = u16::from(view.header.is_some());
    let footer_h = u16::from(view.footer.is_some());
    let list_h = count.saturating_mul(ITEM_HEIGHT).min(area.height);
    let main_len = (header_h + list_h).saturating_add(footer_h);

    let start_y = area.y + area.height.saturating_sub(main_len) / 2;
    let list_y = start_y + header_h;
    let band_x = match view.position {
        DockPosition::Right => area.right().saturating_sub(cross_max),
        _ => area.x,
    };

    let mut layout = DockLayout {
        list_area: Rect::new(band_x, list_y, cross_max, list_h).intersection(area),
        ..DockLayout::default()
    };

    for (i, item) in view.items.iter().enumerate() {
        let offset = u16::try_from(i).unwrap_or(u16::MAX).saturating_mul(ITEM_HEIGHT);
        let y = list_y.saturating_add(offset);
        let extent = item_extent(view, item.tier, BASE_COLUMNS, 2).min(area.width);
        let x = match view.position {
            DockPosition::Right => area.right().saturating_sub(extent),
            _ => area.x,
        };
        layout
            .item_areas
            .push(Rect::new(x, y, extent, ITEM_HEIGHT).intersection(area));
        layout.disabled.push(item.disabled);
    }

    let shelf_cols = BASE_COLUMNS.min(area.width);
    let shelf_x = match view.position {
        DockPosition::Right => area.right().saturating_sub(shelf_cols),
        _ => area.x,
    };
    let anchor = |text: Option<&str>| match view.position {
        DockPosition::Right => area.right().saturating_sub(text.map_or(0, text_width)),
        _ => area.x,
    };

    Geometry {
        layout,
        shelf: Rect::new(shelf_x, start_y, shelf_cols, main_len).intersection(area),
        header_at: view
            .header
            .as_deref()
            .map(|text| (anchor(Some(text)).max(area.x), start_y)),
        footer_at: view
            .footer
            .as_deref()
            .map(|text| (anchor(Some(text)).max(area.x), list_y.saturating_add(list_h))),
    }
}

fn draw_text(buf: &mut Buffer, area: Rect, x: u16, y: u16, text: &str, style: Style) {
    if !contains(area, x, y) {
        return;
    }
    let max_width = usize::from(area.right() - x);
    buf.set_stringn(x, y, text, max_width, style);
}

fn draw_item(buf: &mut Buffer, rect: Rect, item: &ItemView, theme: &DockTheme) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }

    let (border_color, fg) = if item.disabled {
        (theme.disabled, theme.disabled)
    } else {
        (theme.border_for(item.tier), theme.foreground)
    };
    let border_type = if item.tier == MagnificationTier::Current {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let block = Block::bordered()
        .border_type(border_type)
        .border_style(Style::default().fg(border_color).bg(theme.background))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(rect);
    block.render(rect, buf);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let mut icon_style = Style::default().fg(fg).bg(theme.background);
    if item.tier == MagnificationTier::Current {
        icon_style = icon_style.add_modifier(Modifier::BOLD);
    }
    if item.disabled {
        icon_style = icon_style.add_modifier(Modifier::DIM);
    }

    let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
    Paragraph::new(item.icon.as_str())
        .style(icon_style)
        .alignment(Alignment::Center)
        .render(row, buf);
}

fn draw_tooltip(
    buf: &mut Buffer,
    area: Rect,
    item: Rect,
    label: &str,
    position: DockPosition,
    theme: &DockTheme,
) {
    if label.is_empty() {
        return;
    }
    let width = text_width(label).min(area.width);
    let style = Style::default().fg(theme.tooltip_fg).bg(theme.tooltip_bg);

    let (x, y) = match position {
        DockPosition::Bottom => {
            if item.y <= area.y {
                return;
            }
            (centered(area, item, width), item.y - 1)
        }
        DockPosition::Top => {
            if item.bottom() >= area.bottom() {
                return;
            }
            (centered(area, item, width), item.bottom())
        }
        DockPosition::Left => {
            let x = item.right() + 1;
            if x + width > area.right() {
                return;
            }
            (x, item.y + item.height / 2)
        }
        DockPosition::Right => {
            let Some(x) = item.x.checked_sub(width + 1) else {
                return;
            };
            if x < area.x {
                return;
            }
            (x, item.y + item.height / 2)
        }
    };

    draw_text(buf, area, x, y, label, style);
}

fn centered(area: Rect, item: Rect, width: u16) -> u16 {
    let center = item.x + item.width / 2;
    let x = center.saturating_sub(width / 2).max(area.x);
    x.min(area.right().saturating_sub(width))
}
