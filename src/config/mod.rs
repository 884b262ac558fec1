//! Configuration for the control center shell
//!
//! The config file is TOML and lives in the platform config directory
//! (`control-center/config.toml`). It holds the ordered category list and
//! window settings. A missing file is auto-created with defaults; a broken
//! file makes the shell fall back to defaults rather than abort.

mod category;
mod io;

pub use category::{CategoryEntry, default_categories};

use serde::{Deserialize, Serialize};

/// Validation errors for a loaded config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("category list is empty")]
    NoCategories,

    #[error("duplicate category id: {0}")]
    DuplicateCategoryId(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sidebar entries, rendered top to bottom in this order
    #[serde(default = "category::default_categories")]
    pub categories: Vec<CategoryEntry>,

    /// Window geometry and title
    #[serde(default)]
    pub window: WindowSettings,
}

/// Window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,

    /// Initial client width in logical pixels
    #[serde(default = "default_width")]
    pub width: f32,

    /// Initial client height in logical pixels
    #[serde(default = "default_height")]
    pub height: f32,

    /// Fixed sidebar width in logical pixels
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: f32,
}

fn default_title() -> String {
    "Control Center".to_string()
}

fn default_width() -> f32 {
    800.0
}

fn default_height() -> f32 {
    600.0
}

fn default_sidebar_width() -> f32 {
    200.0
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            sidebar_width: default_sidebar_width(),
        }
    }
}

impl Config {
    /// Create a config with the built-in defaults
    pub fn with_defaults() -> Self {
        Self {
            categories: category::default_categories(),
            window: WindowSettings::default(),
        }
    }

    /// Check invariants the shell relies on: at least one category, no
    /// duplicate ids.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }
        let mut seen = std::collections::HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.id.as_str()) {
                return Err(ConfigError::DuplicateCategoryId(category.id.clone()));
            }
        }
        Ok(())
    }

    /// Look up a category by id
    pub fn category(&self, id: &str) -> Option<&CategoryEntry> {
        self.categories.iter().find(|c| c.id == id)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_defaults()
    }
}
