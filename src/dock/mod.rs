//! Dock view.
//!
//! A declarative view over a caller-supplied list of items. The only state is
//! the hovered item, which selects magnification classes for its neighbours.
//!
//! # Usage
//!
//! ```
//! use ratdock::dock::{DefaultResolver, Dock, DockConfig, DockItem};
//!
//! let config = DockConfig::new(vec![
//!     DockItem::new("Finder").icon("F"),
//!     DockItem::new("Terminal").icon(">"),
//! ]);
//! let mut dock = Dock::new();
//! dock.on_item_mouse_enter(1);
//! let tree = dock.render(&config, &DefaultResolver);
//! assert!(tree.find_by_class("dock-item-current").is_some());
//! ```

pub mod event;
pub mod magnification;
pub mod markup;
pub mod model;
pub mod position;
pub mod render;
pub mod state;
mod view;

pub use event::{InteractionEvent, ItemCommandEvent, ItemEvent};
pub use magnification::MagnificationTier;
pub use markup::{ClassList, DockAction, Element, EventBinding, EventKind, Node};
pub use model::{DockConfig, DockItem, Icon, ItemCommand};
pub use position::DockPosition;
pub use render::{DefaultResolver, RenderContext, RenderDescriptor, RenderResolver, TemplateOptions};
pub use state::HoverState;
pub use view::Dock;
