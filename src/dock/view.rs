//! The dock view: hover handlers, click handler and rendering.

use tracing::{debug, trace};

use super::event::{ItemCommandEvent, ItemEvent};
use super::markup::{ClassList, DockAction, Element, EventKind, Node};
use super::model::{DockConfig, DockItem, Icon};
use super::render::{RenderContext, RenderResolver, TemplateOptions};
use super::state::HoverState;

/// A dock instance.
///
/// Owns only the hover state. Configuration is passed in on every render
/// and never modified.
#[derive(Debug, Clone, Default)]
pub struct Dock {
    hover: HoverState,
}

impl Dock {
    /// Creates a dock with nothing hovered.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hover: HoverState::new(),
        }
    }

    /// Current hover state.
    #[must_use]
    pub const fn hover(&self) -> HoverState {
        self.hover
    }

    /// Currently hovered index.
    #[must_use]
    pub const fn hovered(&self) -> Option<usize> {
        self.hover.hovered()
    }

    /// Pointer entered the item at `index`.
    pub fn on_item_mouse_enter(&mut self, index: usize) {
        trace!("dock hover enter {}", index);
        self.hover.enter(index);
    }

    /// Pointer left the item list.
    pub fn on_list_mouse_leave(&mut self) {
        trace!("dock hover reset");
        self.hover.reset();
    }

    /// Item activated.
    ///
    /// Invokes the item command, if any, then cancels the event's default
    /// action. Panics raised by the command propagate to the caller.
    pub fn on_item_click(&self, event: &mut ItemEvent, item: &DockItem) {
        if let Some(command) = &item.command {
            debug!("dock command for '{}'", item.label);
            command(&ItemCommandEvent {
                original_event: &*event,
                item,
            });
        }
        event.prevent_default();
    }

    /// Routes a bound action from the markup tree to its handler.
    ///
    /// Actions naming an index outside `config.items` are ignored. Returns
    /// true if the action was handled.
    pub fn dispatch(&mut self, action: DockAction, event: &mut ItemEvent, config: &DockConfig) -> bool {
        match action {
            DockAction::ItemMouseEnter(index) if index < config.items.len() => {
                self.on_item_mouse_enter(index);
                true
            }
            DockAction::ListMouseLeave => {
                self.on_list_mouse_leave();
                true
            }
            DockAction::ItemClick(index) => match config.item(index) {
                Some(item) => {
                    self.on_item_click(event, item);
                    true
                }
                None => {
                    debug!("ignoring click on missing dock item {}", index);
                    false
                }
            },
            DockAction::ItemMouseEnter(index) => {
                debug!("ignoring hover on missing dock item {}", index);
                false
            }
        }
    }

    /// Renders the configuration under the current hover state.
    #[must_use]
    pub fn render(&self, config: &DockConfig, resolver: &dyn RenderResolver) -> Node {
        let classes = ClassList::new("dock dock-component")
            .extra(Some(config.position.class_name()))
            .when(config.magnification, "dock-magnification")
            .extra(config.class_name.as_deref());

        let container = Element::new("div")
            .class("dock-container")
            .child(self.render_header(config, resolver))
            .child(self.render_list(config, resolver))
            .child(self.render_footer(config, resolver));

        Element::new("div")
            .id(config.id.as_deref())
            .classes(classes)
            .style(&config.style)
            .child(container)
            .into()
    }

    fn render_header(&self, config: &DockConfig, resolver: &dyn RenderResolver) -> Node {
        match &config.header {
            Some(header) => Element::new("div")
                .class("dock-header")
                .child(resolver.resolve(header, &RenderContext::Config(config)))
                .into(),
            None => Node::Empty,
        }
    }

    fn render_footer(&self, config: &DockConfig, resolver: &dyn RenderResolver) -> Node {
        match &config.footer {
            Some(footer) => Element::new("div")
                .class("dock-footer")
                .child(resolver.resolve(footer, &RenderContext::Config(config)))
                .into(),
            None => Node::Empty,
        }
    }

    fn render_list(&self, config: &DockConfig, resolver: &dyn RenderResolver) -> Node {
        let mut list = Element::new("ul")
            .class("dock-list")
            .attr("role", "menu")
            .on(EventKind::MouseLeave, DockAction::ListMouseLeave);

        for (index, item) in config.items.iter().enumerate() {
            list = list.child(self.render_item(config, resolver, item, index));
        }

        list.into()
    }

    fn render_item(
        &self,
        config: &DockConfig,
        resolver: &dyn RenderResolver,
        item: &DockItem,
        index: usize,
    ) -> Node {
        let tier = self.hover.tier_for(index);
        let item_classes = ClassList::new("dock-item").extra(tier.class_name());
        let action_classes = ClassList::new("dock-action").when(item.disabled, "disabled");

        let identifier = match &item.icon {
            Some(Icon::Identifier(name)) => Some(name.as_str()),
            _ => None,
        };
        let icon_classes = ClassList::new("dock-action-icon").extra(identifier);

        let icon = match &item.icon {
            Some(Icon::Identifier(_)) => Element::new("span").classes(icon_classes.clone()).into(),
            Some(Icon::Custom(descriptor)) => {
                resolver.resolve(descriptor, &RenderContext::Config(config))
            }
            None => Node::Empty,
        };

        let element: Node = Element::new("a")
            .classes(action_classes.clone())
            .attr("href", item.url.as_deref().unwrap_or("#"))
            .attr("role", "menuitem")
            .attr_opt("target", item.target.as_deref())
            .attr("tooltip", item.label.as_str())
            .on(EventKind::Click, DockAction::ItemClick(index))
            .child(icon)
            .child(Element::new("span").class("ripple"))
            .into();

        let content = match &item.template {
            Some(template) => {
                let options = TemplateOptions {
                    on_click: DockAction::ItemClick(index),
                    class_name: action_classes.joined(),
                    icon_class_name: icon_classes.joined(),
                    element,
                    config,
                    index,
                };
                resolver.resolve(template, &RenderContext::Template { item, options })
            }
            None => element,
        };

        Element::new("li")
            .classes(item_classes)
            .attr("role", "none")
            .on(EventKind::MouseEnter, DockAction::ItemMouseEnter(index))
            .child(content)
            .into()
    }
}
