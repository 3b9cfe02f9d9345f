//! User interface module.
//!
//! Provides the terminal widgets that draw a rendered dock.

pub mod dock_widget;
pub mod status_line;

pub use dock_widget::{DockLayout, DockWidget};
pub use status_line::{KeyHint, StatusLine};
