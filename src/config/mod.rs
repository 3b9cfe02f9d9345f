//! Configuration module.
//!
//! Loads and saves the dock settings file (`~/.ratdock/dock.toml`) and turns
//! it into a [`DockConfig`].

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dock::{DockConfig, DockItem, DockPosition, ItemCommand, RenderDescriptor};
use crate::logging::LogConfig;
use crate::theme::{DockTheme, parse_color};

/// Maximum size of the settings file (512KB).
const MAX_FILE_SIZE: u64 = 512 * 1024;

/// Default settings file content.
pub const DEFAULT_CONFIG: &str = r##"# ratdock configuration
# =====================
# Lines starting with '#' are comments.

# Root element id and extra class names
id = "main-dock"
# class_name = "glass"

# Screen edge: top, bottom, left, right
position = "bottom"

# Grow icons near the pointer
magnification = true

# Optional caption before and after the item list
header = "apps"
# footer = "v0.1"

# Inline style of the dock root (color, background)
[style]
# color = "#d8dee9"
# background = "#2e3440"

# Widget colors: background, foreground, border, current, adjacent,
# second_adjacent, disabled, caption, tooltip_fg, tooltip_bg
[theme]
# current = "cyan"

# Logs are stored in ~/.ratdock/logs/ with automatic cleanup.
[log]
enabled = true
level = "info"
retention_hours = 24

[[items]]
label = "Finder"
icon = "F"
url = "file:///"

[[items]]
label = "Terminal"
icon = ">_"

[[items]]
label = "Mail"
icon = "@"
url = "mailto:"
target = "_blank"

[[items]]
label = "Music"
icon = "#"

[[items]]
label = "Photos"
icon = "*"

[[items]]
label = "Trash"
icon = "x"
disabled = true
"##;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// File too large.
    #[error("File too large (max {MAX_FILE_SIZE} bytes)")]
    FileTooLarge,

    /// Unknown dock position.
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    /// Unparseable color value.
    #[error("Invalid color for '{key}': {value}")]
    InvalidColor {
        /// Setting key.
        key: String,
        /// Offending value.
        value: String,
    },
}

/// One `[[items]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSettings {
    /// Item label.
    pub label: String,
    /// Icon identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Link target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Link target frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Disabled flag.
    #[serde(default)]
    pub disabled: bool,
}

/// Dock settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockSettings {
    /// Root element id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Position name.
    pub position: String,
    /// Magnification flag.
    pub magnification: bool,
    /// Extra root class names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Header caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Footer caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Inline style of the root element.
    pub style: BTreeMap<String, String>,
    /// Widget color overrides.
    pub theme: BTreeMap<String, String>,
    /// Logging configuration.
    pub log: LogConfig,
    /// Dock items.
    pub items: Vec<ItemSettings>,
}

impl Default for DockSettings {
    fn default() -> Self {
        Self {
            id: None,
            position: DockPosition::default().name().to_string(),
            magnification: true,
            class_name: None,
            header: None,
            footer: None,
            style: BTreeMap::new(),
            theme: BTreeMap::new(),
            log: LogConfig::default(),
            items: Vec::new(),
        }
    }
}

impl DockSettings {
    /// Returns the default settings path (~/.ratdock/dock.toml).
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ratdock")
            .join("dock.toml")
    }

    /// Loads settings from the default path, creating it if it doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_config_path())
    }

    /// Loads settings from a specific path, creating it if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::create_default_config(path)?;
        }

        let metadata = fs::metadata(path)?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(ConfigError::FileTooLarge);
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses and validates settings from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks position and color values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.position()?;

        for key in ["color", "background"] {
            if let Some(value) = self.style.get(key) {
                if parse_color(value).is_none() {
                    return Err(ConfigError::InvalidColor {
                        key: key.to_string(),
                        value: value.clone(),
                    });
                }
            }
        }

        let mut probe = DockTheme::default();
        for (key, value) in &self.theme {
            if !probe.set_color(key, value) {
                return Err(ConfigError::InvalidColor {
                    key: key.clone(),
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }

    /// Parsed dock position.
    pub fn position(&self) -> Result<DockPosition, ConfigError> {
        DockPosition::from_name(&self.position)
            .ok_or_else(|| ConfigError::InvalidPosition(self.position.clone()))
    }

    /// Widget theme with the `[theme]` overrides applied.
    #[must_use]
    pub fn theme(&self) -> DockTheme {
        let mut theme = DockTheme::default();
        for (key, value) in &self.theme {
            if !theme.set_color(key, value) {
                tracing::warn!("Ignoring theme setting {} = {}", key, value);
            }
        }
        theme
    }

    /// Builds a dock configuration, asking `make_command` for each item's
    /// command.
    pub fn to_config<F>(&self, make_command: F) -> Result<DockConfig, ConfigError>
    where
        F: Fn(&ItemSettings) -> Option<ItemCommand>,
    {
        let items = self
            .items
            .iter()
            .map(|settings| {
                let mut item = DockItem::new(settings.label.clone()).disabled(settings.disabled);
                if let Some(icon) = &settings.icon {
                    item = item.icon(icon.clone());
                }
                item.url = settings.url.clone();
                item.target = settings.target.clone();
                item.command = make_command(settings);
                item
            })
            .collect();

        Ok(DockConfig {
            id: self.id.clone(),
            style: self.style.clone(),
            class_name: self.class_name.clone(),
            items,
            position: self.position()?,
            magnification: self.magnification,
            header: caption(self.header.as_deref()),
            footer: caption(self.footer.as_deref()),
        })
    }

    /// Writes the settings to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;

        // Write to temp, then rename
        let temp_path = path.with_extension("tmp");
        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;
        }
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Creates the default settings file.
    fn create_default_config(path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(DEFAULT_CONFIG.as_bytes())?;
        Ok(())
    }
}

/// Header or footer descriptor; blank text renders nothing.
fn caption(text: Option<&str>) -> Option<RenderDescriptor> {
    text.filter(|t| !t.trim().is_empty()).map(RenderDescriptor::text)
}
