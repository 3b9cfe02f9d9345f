//! Markup tree produced by the dock view.
//!
//! The tree is plain data: element tags, class lists, attributes, inline
//! style and event bindings. Event bindings carry a [`DockAction`] instead of
//! a closure so the host can route pointer events back into
//! [`Dock::dispatch`](super::Dock::dispatch) and so two renders of the same
//! input compare equal.

use std::collections::BTreeMap;

/// Kind of pointer interaction an element listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Primary activation (mouse click, Enter).
    Click,
    /// Pointer entered the element.
    MouseEnter,
    /// Pointer left the element.
    MouseLeave,
}

/// Action the host dispatches back to the dock when a bound event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DockAction {
    /// Pointer entered the item at this index.
    ItemMouseEnter(usize),
    /// Pointer left the item list.
    ListMouseLeave,
    /// Item at this index was activated.
    ItemClick(usize),
}

/// An event listener attached to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventBinding {
    /// Event kind.
    pub kind: EventKind,
    /// Action to dispatch.
    pub action: DockAction,
}

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Node {
    /// Renders nothing.
    #[default]
    Empty,
    /// Plain text.
    Text(String),
    /// An element with children.
    Element(Element),
}

impl Node {
    /// Creates a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the element if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns true for [`Node::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Concatenated text of this node and all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Empty => {}
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// First element (depth-first, self included) carrying `class`.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        let element = self.as_element()?;
        if element.has_class(class) {
            return Some(element);
        }
        element
            .children
            .iter()
            .find_map(|child| child.find_by_class(class))
    }

    /// All elements (depth-first, self included) carrying `class`.
    #[must_use]
    pub fn find_all_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if let Self::Element(element) = self {
            if element.has_class(class) {
                found.push(element);
            }
            for child in &element.children {
                child.collect_by_class(class, found);
            }
        }
    }

    /// First attribute value named `name` found depth-first.
    #[must_use]
    pub fn find_attribute(&self, name: &str) -> Option<&str> {
        let element = self.as_element()?;
        if let Some(value) = element.attribute(name) {
            return Some(value);
        }
        element
            .children
            .iter()
            .find_map(|child| child.find_attribute(name))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element: tag, identity, classes, attributes, style, bindings, children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Tag name (`div`, `ul`, `li`, `a`, `span`, ...).
    pub tag: String,
    /// Optional element id.
    pub id: Option<String>,
    /// Class names in insertion order, without duplicates.
    pub classes: Vec<String>,
    /// Attributes other than id/class/style.
    pub attributes: BTreeMap<String, String>,
    /// Inline style properties.
    pub style: BTreeMap<String, String>,
    /// Event listeners.
    pub bindings: Vec<EventBinding>,
    /// Child nodes.
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an empty element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Sets the element id.
    #[must_use]
    pub fn id(mut self, id: Option<&str>) -> Self {
        self.id = id.map(str::to_string);
        self
    }

    /// Appends every class of a [`ClassList`].
    #[must_use]
    pub fn classes(mut self, classes: ClassList) -> Self {
        for class in classes.into_vec() {
            self.push_class(class);
        }
        self
    }

    /// Appends a single class.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.push_class(class.to_string());
        self
    }

    fn push_class(&mut self, class: String) {
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    /// Sets an attribute.
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// Sets an attribute if `value` is present.
    #[must_use]
    pub fn attr_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Replaces the inline style.
    #[must_use]
    pub fn style(mut self, style: &BTreeMap<String, String>) -> Self {
        self.style = style.clone();
        self
    }

    /// Adds an event binding.
    #[must_use]
    pub fn on(mut self, kind: EventKind, action: DockAction) -> Self {
        self.bindings.push(EventBinding { kind, action });
        self
    }

    /// Appends a child unless it is [`Node::Empty`].
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        let node = node.into();
        if !node.is_empty() {
            self.children.push(node);
        }
        self
    }

    /// Returns true if the element carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns the action bound to `kind`, if any.
    #[must_use]
    pub fn binding(&self, kind: EventKind) -> Option<DockAction> {
        self.bindings
            .iter()
            .find(|binding| binding.kind == kind)
            .map(|binding| binding.action)
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
}

/// Class name composer: fixed names, conditional names, and free-form extras.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    /// Starts from whitespace-separated base names.
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self::default().extra(Some(base))
    }

    /// Adds `name` when `condition` holds.
    #[must_use]
    pub fn when(mut self, condition: bool, name: &str) -> Self {
        if condition {
            self.names.push(name.to_string());
        }
        self
    }

    /// Adds whitespace-separated names from an optional string.
    #[must_use]
    pub fn extra(mut self, names: Option<&str>) -> Self {
        if let Some(names) = names {
            self.names
                .extend(names.split_whitespace().map(str::to_string));
        }
        self
    }

    /// Returns the names as a space-joined string.
    #[must_use]
    pub fn joined(&self) -> String {
        self.names.join(" ")
    }

    /// Consumes the list.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_composition() {
        let classes = ClassList::new("dock  dock-component")
            .when(true, "on")
            .when(false, "off")
            .extra(Some(" a b "))
            .extra(None);
        assert_eq!(classes.joined(), "dock dock-component on a b");
    }

    #[test]
    fn test_element_deduplicates_classes() {
        let element = Element::new("div")
            .classes(ClassList::new("x y"))
            .class("x")
            .class("");
        assert_eq!(element.classes, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_empty_children_are_skipped() {
        let element = Element::new("div").child(Node::Empty).child(Node::text("a"));
        assert_eq!(element.children.len(), 1);
    }

    #[test]
    fn test_queries() {
        let tree: Node = Element::new("div")
            .class("outer")
            .child(
                Element::new("span")
                    .class("inner")
                    .attr("tooltip", "hi")
                    .child(Node::text("one")),
            )
            .child(Element::new("span").class("inner").child(Node::text("two")))
            .into();

        assert_eq!(tree.text_content(), "onetwo");
        assert_eq!(tree.find_all_by_class("inner").len(), 2);
        assert_eq!(tree.find_attribute("tooltip"), Some("hi"));
        assert!(tree.find_by_class("missing").is_none());
        assert_eq!(
            tree.find_by_class("outer").map(|e| e.tag.as_str()),
            Some("div")
        );
    }

    #[test]
    fn test_binding_lookup() {
        let element = Element::new("li").on(EventKind::MouseEnter, DockAction::ItemMouseEnter(2));
        assert_eq!(
            element.binding(EventKind::MouseEnter),
            Some(DockAction::ItemMouseEnter(2))
        );
        assert_eq!(element.binding(EventKind::Click), None);
    }
}
