//! Demo application state and event handling.
//!
//! Owns a [`Dock`] and the [`DockConfig`] it renders, maps terminal input to
//! the dock's handlers and records item activations in a status message.

mod input;
mod input_mouse;
mod render;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event};
use tracing::{debug, info};

use crate::config::{ConfigError, DockSettings};
use crate::dock::{
    DefaultResolver, Dock, DockAction, DockConfig, ItemCommand, ItemCommandEvent, ItemEvent,
};
use crate::theme::DockTheme;
use crate::ui::DockLayout;

/// Event poll timeout in milliseconds.
const POLL_TIMEOUT_MS: u64 = 50;

/// Shared slot the item commands write their status message into.
type ActivityLog = Rc<RefCell<Option<String>>>;

/// Application state.
pub struct App {
    /// The dock view.
    dock: Dock,
    /// Configuration the dock renders.
    config: DockConfig,
    /// Widget colors.
    theme: DockTheme,
    /// Descriptor resolver.
    resolver: DefaultResolver,
    /// Hit-test layout of the last render.
    last_layout: RefCell<DockLayout>,
    /// Last activity message.
    activity: ActivityLog,
    /// Whether the app is running.
    running: bool,
}

impl App {
    /// Creates the app from loaded settings.
    pub fn new(settings: &DockSettings) -> Result<Self, ConfigError> {
        let activity: ActivityLog = Rc::new(RefCell::new(None));
        let config = settings.to_config(|_| Some(Self::activation_command(&activity)))?;
        info!(
            "Dock ready: {} item(s), position {}",
            config.items.len(),
            config.position.name()
        );

        Ok(Self {
            dock: Dock::new(),
            config,
            theme: settings.theme(),
            resolver: DefaultResolver,
            last_layout: RefCell::new(DockLayout::default()),
            activity,
            running: true,
        })
    }

    /// Command attached to every configured item.
    fn activation_command(activity: &ActivityLog) -> ItemCommand {
        let activity = Rc::clone(activity);
        Rc::new(move |event: &ItemCommandEvent<'_>| {
            let target = event.item.url.as_deref().unwrap_or("#");
            info!("Activated '{}' -> {}", event.item.label, target);
            *activity.borrow_mut() = Some(format!("Activated {} -> {}", event.item.label, target));
        })
    }

    /// Returns true if the app is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stops the app.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// The dock view.
    #[must_use]
    pub const fn dock(&self) -> &Dock {
        &self.dock
    }

    /// The rendered configuration.
    #[must_use]
    pub const fn config(&self) -> &DockConfig {
        &self.config
    }

    /// Last activity message.
    #[must_use]
    pub fn status(&self) -> Option<String> {
        self.activity.borrow().clone()
    }

    /// Hit-test layout of the last render.
    #[must_use]
    pub fn layout(&self) -> DockLayout {
        self.last_layout.borrow().clone()
    }

    /// Polls for one terminal event and handles it.
    pub fn update(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(POLL_TIMEOUT_MS))? {
            let event = event::read()?;
            self.handle_event(event);
        }
        Ok(())
    }

    /// Handles a terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Activates the item at `index` unless it is disabled.
    ///
    /// Returns true if the item command ran.
    pub fn activate(&mut self, index: usize, mut event: ItemEvent) -> bool {
        if self.config.item(index).is_none_or(|item| item.disabled) {
            debug!("Skipping activation of item {}", index);
            return false;
        }
        self.dock
            .dispatch(DockAction::ItemClick(index), &mut event, &self.config)
    }

    /// Cycles the dock to the next screen edge.
    pub fn cycle_position(&mut self) {
        self.config.position = self.config.position.next();
        self.dock.on_list_mouse_leave();
        debug!("Dock position: {}", self.config.position.name());
    }

    /// Toggles hover magnification.
    pub fn toggle_magnification(&mut self) {
        self.config.magnification = !self.config.magnification;
        debug!("Dock magnification: {}", self.config.magnification);
    }
}
