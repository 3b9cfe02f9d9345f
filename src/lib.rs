//! Ratdock
//!
//! A dock of application items with hover magnification, drawn in the
//! terminal.
//!
//! # Architecture
//!
//! - **Dock Module**: item model, hover state and the markup tree a render produces
//! - **UI Module**: Ratatui widgets that style the tree by its class names
//! - **Config Module**: TOML settings loaded from `~/.ratdock/dock.toml`
//! - **App Module**: demo application mapping terminal input to dock handlers
//!
//! # Usage
//!
//! ```no_run
//! use ratdock::app::App;
//! use ratdock::config::DockSettings;
//!
//! let settings = DockSettings::load().expect("Failed to load settings");
//! let mut app = App::new(&settings).expect("Failed to create app");
//! // Run event loop...
//! ```

// Clippy configuration - allow common patterns
#![allow(clippy::unnested_or_patterns)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::struct_excessive_bools)]

pub mod app;
pub mod config;
pub mod dock;
pub mod logging;
pub mod theme;
pub mod ui;

// Re-export main types
pub use app::App;
pub use config::{ConfigError, DockSettings};
pub use dock::{Dock, DockConfig, DockItem};
pub use theme::DockTheme;
pub use ui::DockWidget;
