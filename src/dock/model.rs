//! Dock items and dock configuration.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::event::ItemCommandEvent;
use super::position::DockPosition;
use super::render::RenderDescriptor;

/// Callback invoked when an item is activated.
pub type ItemCommand = Rc<dyn Fn(&ItemCommandEvent<'_>)>;

/// Item icon.
#[derive(Clone)]
pub enum Icon {
    /// Icon identifier, rendered as a styled marker.
    Identifier(String),
    /// Custom content resolved by the host.
    Custom(RenderDescriptor),
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => f.debug_tuple("Identifier").field(name).finish(),
            Self::Custom(descriptor) => f.debug_tuple("Custom").field(descriptor).finish(),
        }
    }
}

/// A single dock entry.
#[derive(Clone, Default)]
pub struct DockItem {
    /// Label, shown as a tooltip.
    pub label: String,
    /// Icon.
    pub icon: Option<Icon>,
    /// Link target.
    pub url: Option<String>,
    /// Link target frame.
    pub target: Option<String>,
    /// Disabled items are drawn inert.
    pub disabled: bool,
    /// Activation callback.
    pub command: Option<ItemCommand>,
    /// Replaces the default action element.
    pub template: Option<RenderDescriptor>,
}

impl DockItem {
    /// Creates an item with a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets an identifier icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(Icon::Identifier(icon.into()));
        self
    }

    /// Sets a custom icon.
    #[must_use]
    pub fn custom_icon(mut self, descriptor: RenderDescriptor) -> Self {
        self.icon = Some(Icon::Custom(descriptor));
        self
    }

    /// Sets the link target.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the link target frame.
    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the activation callback.
    #[must_use]
    pub fn command<F>(mut self, command: F) -> Self
    where
        F: Fn(&ItemCommandEvent<'_>) + 'static,
    {
        self.command = Some(Rc::new(command));
        self
    }

    /// Sets a template override.
    #[must_use]
    pub fn template(mut self, template: RenderDescriptor) -> Self {
        self.template = Some(template);
        self
    }
}

impl fmt::Debug for DockItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DockItem")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("url", &self.url)
            .field("target", &self.target)
            .field("disabled", &self.disabled)
            .field("command", &self.command.is_some())
            .field("template", &self.template)
            .finish()
    }
}

/// Everything the dock view renders from.
#[derive(Debug, Clone)]
pub struct DockConfig {
    /// Root element id.
    pub id: Option<String>,
    /// Inline style of the root element.
    pub style: BTreeMap<String, String>,
    /// Extra class names for the root element.
    pub class_name: Option<String>,
    /// Items in display order.
    pub items: Vec<DockItem>,
    /// Screen edge.
    pub position: DockPosition,
    /// Whether hover magnification is enabled.
    pub magnification: bool,
    /// Content before the item list.
    pub header: Option<RenderDescriptor>,
    /// Content after the item list.
    pub footer: Option<RenderDescriptor>,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            id: None,
            style: BTreeMap::new(),
            class_name: None,
            items: Vec::new(),
            position: DockPosition::default(),
            magnification: true,
            header: None,
            footer: None,
        }
    }
}

impl DockConfig {
    /// Creates a configuration over the given items.
    #[must_use]
    pub fn new(items: Vec<DockItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Sets the position.
    #[must_use]
    pub fn position(mut self, position: DockPosition) -> Self {
        self.position = position;
        self
    }

    /// Sets the magnification flag.
    #[must_use]
    pub fn magnification(mut self, magnification: bool) -> Self {
        self.magnification = magnification;
        self
    }

    /// Sets the header.
    #[must_use]
    pub fn header(mut self, header: RenderDescriptor) -> Self {
        self.header = Some(header);
        self
    }

    /// Sets the footer.
    #[must_use]
    pub fn footer(mut self, footer: RenderDescriptor) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Returns the item at `index`.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&DockItem> {
        self.items.get(index)
    }
}
