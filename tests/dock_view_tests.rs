//! Integration tests for the dock view.
//!
//! Covers hover tiers, item activation, header/footer placement and custom
//! templates on the rendered markup tree.

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use ratdock::dock::{
    DefaultResolver, Dock, DockAction, DockConfig, DockItem, Element, EventKind,
    InteractionEvent, ItemEvent, MagnificationTier, Node, RenderContext, RenderDescriptor,
};

fn items(count: usize) -> Vec<DockItem> {
    (0..count)
        .map(|i| DockItem::new(format!("Item {i}")).icon(format!("icon-{i}")))
        .collect()
}

fn tiers(tree: &Node) -> Vec<MagnificationTier> {
    tree.find_all_by_class("dock-item")
        .into_iter()
        .map(|item| {
            item.classes
                .iter()
                .find_map(|class| MagnificationTier::from_class(class))
                .unwrap_or_default()
        })
        .collect()
}

// ============================================================================
// Hover tiers
// ============================================================================

proptest! {
    #[test]
    fn test_hover_assigns_one_current_tier((count, hovered) in (1usize..24).prop_flat_map(|n| (Just(n), 0..n))) {
        let config = DockConfig::new(items(count));
        let mut dock = Dock::new();
        dock.on_item_mouse_enter(hovered);

        let tiers = tiers(&dock.render(&config, &DefaultResolver));
        prop_assert_eq!(tiers.len(), count);

        let current = tiers.iter().filter(|t| **t == MagnificationTier::Current).count();
        let adjacent = tiers.iter().filter(|t| t.is_adjacent()).count();
        let second = tiers.iter().filter(|t| t.is_second_adjacent()).count();
        let base = tiers.iter().filter(|t| **t == MagnificationTier::Base).count();

        prop_assert_eq!(current, 1);
        prop_assert!(adjacent <= 2);
        prop_assert!(second <= 2);
        prop_assert_eq!(current + adjacent + second + base, count);
        prop_assert_eq!(tiers[hovered], MagnificationTier::Current);
    }
}

#[test]
fn test_hover_tiers_in_middle() {
    let config = DockConfig::new(items(7));
    let mut dock = Dock::new();
    dock.on_item_mouse_enter(3);

    assert_eq!(
        tiers(&dock.render(&config, &DefaultResolver)),
        vec![
            MagnificationTier::Base,
            MagnificationTier::SecondPrev,
            MagnificationTier::Prev,
            MagnificationTier::Current,
            MagnificationTier::Next,
            MagnificationTier::SecondNext,
            MagnificationTier::Base,
        ]
    );
}

#[test]
fn test_hover_tiers_at_edges() {
    let config = DockConfig::new(items(3));
    let mut dock = Dock::new();

    dock.on_item_mouse_enter(0);
    assert_eq!(
        tiers(&dock.render(&config, &DefaultResolver)),
        vec![
            MagnificationTier::Current,
            MagnificationTier::Next,
            MagnificationTier::SecondNext,
        ]
    );

    dock.on_item_mouse_enter(2);
    assert_eq!(
        tiers(&dock.render(&config, &DefaultResolver)),
        vec![
            MagnificationTier::SecondPrev,
            MagnificationTier::Prev,
            MagnificationTier::Current,
        ]
    );
}

#[test]
fn test_mouse_leave_clears_tiers() {
    let config = DockConfig::new(items(5));
    let mut dock = Dock::new();
    dock.on_item_mouse_enter(2);
    dock.on_list_mouse_leave();

    assert_eq!(dock.hovered(), None);
    let tiers = tiers(&dock.render(&config, &DefaultResolver));
    assert!(tiers.iter().all(|t| *t == MagnificationTier::Base));
}

#[test]
fn test_tier_classes_without_magnification() {
    let config = DockConfig::new(items(3)).magnification(false);
    let mut dock = Dock::new();
    dock.on_item_mouse_enter(1);

    let tree = dock.render(&config, &DefaultResolver);
    assert!(tree.find_by_class("dock-magnification").is_none());
    assert!(tree.find_by_class("dock-item-current").is_some());
}

#[test]
fn test_bindings_route_back_to_handlers() {
    let config = DockConfig::new(items(4));
    let mut dock = Dock::new();
    let tree = dock.render(&config, &DefaultResolver);

    let list = tree.find_by_class("dock-list").expect("list");
    assert_eq!(list.attribute("role"), Some("menu"));
    assert_eq!(list.binding(EventKind::MouseLeave), Some(DockAction::ListMouseLeave));

    let third = tree.find_all_by_class("dock-item")[2].clone();
    assert_eq!(third.attribute("role"), Some("none"));
    let enter = third.binding(EventKind::MouseEnter).expect("enter binding");

    let mut event = ItemEvent::new(InteractionEvent::Synthetic);
    assert!(dock.dispatch(enter, &mut event, &config));
    assert_eq!(dock.hovered(), Some(2));
}

// ============================================================================
// Activation
// ============================================================================

#[test]
fn test_click_invokes_command_once() {
    let calls: Rc<RefCell<Vec<(String, bool)>>> = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&calls);
    let item = DockItem::new("Mail").url("mailto:x").command(move |event| {
        seen.borrow_mut().push((
            event.item.label.clone(),
            event.original_event.is_default_prevented(),
        ));
    });
    let config = DockConfig::new(vec![DockItem::new("Finder"), item]);

    let mut dock = Dock::new();
    let mut event = ItemEvent::new(InteractionEvent::Synthetic);
    assert!(dock.dispatch(DockAction::ItemClick(1), &mut event, &config));

    assert_eq!(*calls.borrow(), vec![("Mail".to_string(), false)]);
    assert!(event.is_default_prevented());
}

#[test]
fn test_click_without_command_prevents_default() {
    let config = DockConfig::new(items(2));
    let dock = Dock::new();
    let mut event = ItemEvent::new(InteractionEvent::Synthetic);

    dock.on_item_click(&mut event, &config.items[0]);
    assert!(event.is_default_prevented());
}

#[test]
fn test_click_does_not_change_hover() {
    let config = DockConfig::new(items(3));
    let mut dock = Dock::new();
    dock.on_item_mouse_enter(1);

    let mut event = ItemEvent::new(InteractionEvent::Synthetic);
    dock.dispatch(DockAction::ItemClick(0), &mut event, &config);
    assert_eq!(dock.hovered(), Some(1));
}

// ============================================================================
// Header, footer and templates
// ============================================================================

#[test]
fn test_header_before_list_without_footer() {
    let config = DockConfig::new(items(2)).header(RenderDescriptor::text("apps"));
    let tree = Dock::new().render(&config, &DefaultResolver);

    let container = tree.find_by_class("dock-container").expect("container");
    let order: Vec<&str> = container
        .child_elements()
        .map(|e| e.classes[0].as_str())
        .collect();
    assert_eq!(order, vec!["dock-header", "dock-list"]);

    let header = container.child_elements().next().expect("header").clone();
    assert_eq!(Node::Element(header).text_content(), "apps");
    assert!(tree.find_by_class("dock-footer").is_none());
}

#[test]
fn test_footer_from_function() {
    let config = DockConfig::new(items(3)).footer(RenderDescriptor::function(|context| {
        match context {
            RenderContext::Config(config) => Node::text(format!("{} apps", config.items.len())),
            RenderContext::Template { .. } => Node::Empty,
        }
    }));
    let tree = Dock::new().render(&config, &DefaultResolver);

    let container = tree.find_by_class("dock-container").expect("container");
    let last = container.child_elements().last().expect("footer").clone();
    assert!(last.has_class("dock-footer"));
    assert_eq!(Node::Element(last).text_content(), "3 apps");
}

#[test]
fn test_custom_icon_replaces_marker() {
    let config = DockConfig::new(vec![
        DockItem::new("Custom").custom_icon(RenderDescriptor::markup(
            Element::new("img").attr("src", "logo.png"),
        )),
    ]);
    let tree = Dock::new().render(&config, &DefaultResolver);

    assert!(tree.find_by_class("dock-action-icon").is_none());
    assert_eq!(tree.find_attribute("src"), Some("logo.png"));
}

#[test]
fn test_template_replaces_default_element() {
    let template = RenderDescriptor::function(|context| match context {
        RenderContext::Template { item, options } => Element::new("button")
            .class(&options.class_name)
            .attr("data-index", options.index.to_string())
            .attr("data-icon", options.icon_class_name.as_str())
            .on(EventKind::Click, options.on_click)
            .child(Node::text(item.label.to_uppercase()))
            .into(),
        RenderContext::Config(_) => Node::Empty,
    });
    let config = DockConfig::new(vec![
        DockItem::new("Finder").icon("finder"),
        DockItem::new("Notes").icon("notes").template(template),
    ]);
    let tree = Dock::new().render(&config, &DefaultResolver);

    let item = tree.find_all_by_class("dock-item")[1].clone();
    let content = item.child_elements().next().expect("content").clone();
    assert_eq!(content.tag, "button");
    assert_eq!(content.attribute("data-index"), Some("1"));
    assert_eq!(content.attribute("data-icon"), Some("dock-action-icon notes"));
    assert_eq!(content.binding(EventKind::Click), Some(DockAction::ItemClick(1)));
    assert_eq!(Node::Element(item).text_content(), "NOTES");

    // other items keep the default element
    let links: Vec<&str> = tree
        .find_all_by_class("dock-action")
        .iter()
        .map(|e| e.tag.as_str())
        .collect();
    assert_eq!(links, vec!["a", "button"]);
}

#[test]
fn test_render_is_repeatable() {
    let config = DockConfig::new(items(4))
        .header(RenderDescriptor::text("apps"))
        .footer(RenderDescriptor::text("end"));
    let mut dock = Dock::new();
    dock.on_item_mouse_enter(2);

    let first = dock.render(&config, &DefaultResolver);
    let second = dock.render(&config, &DefaultResolver);
    assert_eq!(first, second);
    assert_eq!(config.items.len(), 4);
}
