//! Custom content resolution.
//!
//! Icons, header, footer and item templates may be supplied as a
//! [`RenderDescriptor`]. The dock never interprets a descriptor itself; it
//! hands it to a [`RenderResolver`] together with a [`RenderContext`].

use std::fmt;
use std::rc::Rc;

use super::markup::{DockAction, Node};
use super::model::{DockConfig, DockItem};

/// Function-like render descriptor.
pub type RenderFn = Rc<dyn Fn(&RenderContext<'_>) -> Node>;

/// Caller-supplied content.
#[derive(Clone)]
pub enum RenderDescriptor {
    /// Literal text.
    Text(String),
    /// Prebuilt markup, used as-is.
    Markup(Node),
    /// Computed from the render context.
    Function(RenderFn),
}

impl RenderDescriptor {
    /// Literal text descriptor.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Prebuilt markup descriptor.
    #[must_use]
    pub fn markup(node: impl Into<Node>) -> Self {
        Self::Markup(node.into())
    }

    /// Function descriptor.
    #[must_use]
    pub fn function<F>(render: F) -> Self
    where
        F: Fn(&RenderContext<'_>) -> Node + 'static,
    {
        Self::Function(Rc::new(render))
    }
}

impl fmt::Debug for RenderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Markup(node) => f.debug_tuple("Markup").field(node).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Data handed to an item template alongside the item.
#[derive(Debug, Clone)]
pub struct TemplateOptions<'a> {
    /// Action to bind for activation.
    pub on_click: DockAction,
    /// Class names of the default action element.
    pub class_name: String,
    /// Class names of the default icon marker.
    pub icon_class_name: String,
    /// The default action element the template replaces.
    pub element: Node,
    /// Configuration being rendered.
    pub config: &'a DockConfig,
    /// Index of the item.
    pub index: usize,
}

/// Context a descriptor is resolved in.
#[derive(Debug, Clone)]
pub enum RenderContext<'a> {
    /// Icon, header or footer of the dock.
    Config(&'a DockConfig),
    /// Item template.
    Template {
        /// The item being rendered.
        item: &'a DockItem,
        /// Default element and class names.
        options: TemplateOptions<'a>,
    },
}

/// Turns descriptors into markup.
pub trait RenderResolver {
    /// Resolves a descriptor in a context.
    fn resolve(&self, descriptor: &RenderDescriptor, context: &RenderContext<'_>) -> Node;
}

/// Standard resolution: text becomes a text node, markup is cloned,
/// functions are called with the context.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResolver;

impl RenderResolver for DefaultResolver {
    fn resolve(&self, descriptor: &RenderDescriptor, context: &RenderContext<'_>) -> Node {
        match descriptor {
            RenderDescriptor::Text(text) => Node::text(text.clone()),
            RenderDescriptor::Markup(node) => node.clone(),
            RenderDescriptor::Function(render) => render(context),
        }
    }
}
