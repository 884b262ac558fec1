//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Config;

impl Config {
    /// Get the config directory path (`<platform config dir>/control-center/`)
    pub fn global_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("control-center")
    }

    /// Get the config file path (`<platform config dir>/control-center/config.toml`)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file and validate it.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Write this configuration to a file, creating parent directories as
    /// needed.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Load configuration rooted at the given config directory, creating
    /// the default config file on first run.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join("config.toml");
        if !path.exists() {
            let config = Self::with_defaults();
            config.save_to_file(&path)?;
            return Ok(config);
        }
        Self::from_file(&path)
    }

    /// Load the global configuration, creating the default config file on
    /// first run.
    pub fn load() -> Result<Self> {
        Self::load_from_dir(&Self::global_config_dir())
    }
}
