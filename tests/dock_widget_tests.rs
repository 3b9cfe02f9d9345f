//! Integration tests for the terminal dock widget.
//!
//! Geometry, hit testing and drawn text for rendered dock trees.

use pretty_assertions::assert_eq;
use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};

use ratdock::dock::{
    DefaultResolver, Dock, DockConfig, DockItem, DockPosition, Element, Node, RenderDescriptor,
};
use ratdock::theme::DockTheme;
use ratdock::ui::{DockLayout, DockWidget};

fn dock_tree(config: &DockConfig, hovered: Option<usize>) -> Node {
    let mut dock = Dock::new();
    if let Some(index) = hovered {
        dock.on_item_mouse_enter(index);
    }
    dock.render(config, &DefaultResolver)
}

fn items(count: usize) -> Vec<DockItem> {
    (0..count)
        .map(|i| DockItem::new(format!("Item {i}")).icon(format!("{i}")))
        .collect()
}

// ============================================================================
// Helper: render widget to buffer and extract row text
// ============================================================================

fn render_to_rows(width: u16, height: u16, tree: &Node) -> (Vec<String>, DockLayout) {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    let theme = DockTheme::default();
    let mut layout = DockLayout::default();
    DockWidget::new(tree, &theme).render(area, &mut buf, &mut layout);

    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    buf.cell((x, y))
                        .map(|c| c.symbol().chars().next().unwrap_or(' '))
                        .unwrap_or(' ')
                })
                .collect::<String>()
        })
        .collect();
    (rows, layout)
}

/// Characters `x..x + len` of a row; rows hold multi-byte border glyphs.
fn span(row: &str, x: u16, len: u16) -> String {
    row.chars().skip(usize::from(x)).take(usize::from(len)).collect()
}

// ============================================================================
// Horizontal docks
// ============================================================================

#[test]
fn test_bottom_dock_magnified_geometry() {
    let config = DockConfig::new(items(3));
    let (_, layout) = render_to_rows(40, 8, &dock_tree(&config, Some(1)));

    assert_eq!(
        layout.item_areas,
        vec![
            Rect::new(11, 3, 5, 5),
            Rect::new(17, 2, 5, 6),
            Rect::new(23, 3, 5, 5),
        ]
    );
    assert_eq!(layout.list_area, Rect::new(11, 2, 17, 6));
}

#[test]
fn test_bottom_dock_without_hover_is_flat() {
    let config = DockConfig::new(items(3));
    let (_, layout) = render_to_rows(40, 8, &dock_tree(&config, None));

    for area in &layout.item_areas {
        assert_eq!(area.height, 3);
        assert_eq!(area.y, 5);
    }
}

#[test]
fn test_magnification_off_keeps_uniform_height() {
    let config = DockConfig::new(items(4)).magnification(false);
    let (_, layout) = render_to_rows(40, 8, &dock_tree(&config, Some(2)));

    assert!(layout.item_areas.iter().all(|area| area.height == 3));
    assert_eq!(layout.list_area.height, 3);
}

#[test]
fn test_top_dock_anchors_to_top() {
    let config = DockConfig::new(items(3)).position(DockPosition::Top);
    let (_, layout) = render_to_rows(40, 8, &dock_tree(&config, Some(0)));

    assert!(layout.item_areas.iter().all(|area| area.y == 0));
    assert_eq!(
        layout.item_areas.iter().map(|a| a.height).collect::<Vec<_>>(),
        vec![6, 5, 4]
    );
}

#[test]
fn test_tooltip_above_hovered_item() {
    let config = DockConfig::new(items(3));
    let (rows, _) = render_to_rows(40, 8, &dock_tree(&config, Some(1)));

    assert_eq!(span(&rows[1], 16, 6), "Item 1");
    assert!(!rows.iter().any(|row| row.contains("Item 0")));
}

#[test]
fn test_icons_drawn_inside_items() {
    let config = DockConfig::new(items(3));
    let (rows, layout) = render_to_rows(40, 8, &dock_tree(&config, None));

    let first = layout.item_areas[0];
    let row = &rows[usize::from(first.y + 1)];
    assert_eq!(span(row, first.x, first.width), "│ 0 │");
}

#[test]
fn test_header_caption_drawn() {
    let config = DockConfig::new(items(3)).header(RenderDescriptor::text("apps"));
    let (rows, layout) = render_to_rows(40, 8, &dock_tree(&config, None));

    assert_eq!(span(&rows[6], 9, 4), "apps");
    assert_eq!(layout.list_area.x, 14);
}

// ============================================================================
// Vertical docks
// ============================================================================

#[test]
fn test_left_dock_widths() {
    let config = DockConfig::new(items(3)).position(DockPosition::Left);
    let (_, layout) = render_to_rows(30, 12, &dock_tree(&config, Some(0)));

    assert_eq!(
        layout.item_areas,
        vec![
            Rect::new(0, 1, 11, 3),
            Rect::new(0, 4, 9, 3),
            Rect::new(0, 7, 7, 3),
        ]
    );
    assert_eq!(layout.list_area, Rect::new(0, 1, 11, 9));
}

#[test]
fn test_right_dock_anchors_to_right_edge() {
    let config = DockConfig::new(items(3)).position(DockPosition::Right);
    let (_, layout) = render_to_rows(30, 12, &dock_tree(&config, Some(0)));

    let xs: Vec<u16> = layout.item_areas.iter().map(|a| a.x).collect();
    assert_eq!(xs, vec![19, 21, 23]);
    assert!(layout.item_areas.iter().all(|a| a.right() == 30));
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_testing() {
    let config = DockConfig::new(vec![
        DockItem::new("A").icon("a"),
        DockItem::new("B").icon("b"),
        DockItem::new("C").icon("c").disabled(true),
    ]);
    let (_, layout) = render_to_rows(40, 8, &dock_tree(&config, Some(1)));

    assert_eq!(layout.item_at(19, 3), Some(1));
    assert_eq!(layout.item_at(12, 6), Some(0));
    // gap column between items
    assert_eq!(layout.item_at(16, 6), None);
    assert!(layout.contains_list(16, 6));
    assert!(!layout.contains_list(0, 0));
    assert!(layout.is_disabled(2));
    assert!(!layout.is_disabled(0));
    assert!(!layout.is_disabled(9));
}

#[test]
fn test_disabled_read_from_action_only() {
    let config = DockConfig::new(vec![
        DockItem::new("Block").icon("disabled"),
        DockItem::new("Img").custom_icon(RenderDescriptor::markup(
            Element::new("span").class("disabled"),
        )),
        DockItem::new("Off").icon("o").disabled(true),
    ]);
    let (_, layout) = render_to_rows(40, 8, &dock_tree(&config, None));

    assert_eq!(layout.disabled, vec![false, false, true]);
}

#[test]
fn test_layout_matches_render() {
    let config = DockConfig::new(items(5));
    let tree = dock_tree(&config, Some(3));
    let theme = DockTheme::default();
    let area = Rect::new(0, 0, 50, 10);

    let predicted = DockWidget::new(&tree, &theme).layout(area);
    let (_, drawn) = render_to_rows(50, 10, &tree);
    assert_eq!(predicted, drawn);
}
