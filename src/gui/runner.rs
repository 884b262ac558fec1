//! GUI runner - loads the config and launches the shell window

use anyhow::Result;
use egui::ViewportBuilder;
use std::path::PathBuf;
use tracing::{info, warn};

use super::app::ControlCenterApp;
use crate::config::Config;

/// Load the config from the given path, degrading to defaults on any
/// read, parse or validation failure. Config problems are never fatal;
/// only the toolkit itself can abort startup.
fn load_config(config_override: Option<PathBuf>) -> Config {
    match config_override {
        Some(path) => match Config::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config ({}): {:#}. Falling back to defaults.",
                    path.display(),
                    e
                );
                Config::with_defaults()
            }
        },
        // Global config is auto-created on first run
        None => Config::load().unwrap_or_else(|e| {
            warn!("Failed to load config: {:#}. Falling back to defaults.", e);
            Config::with_defaults()
        }),
    }
}

/// Run the control center shell.
pub fn run_gui(config_override: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_override);

    info!(
        "Starting {} with {} categories",
        config.window.title,
        config.categories.len()
    );

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(&config.window.title),
        centered: true,
        ..Default::default()
    };

    let title = config.window.title.clone();
    let app = ControlCenterApp::new(config);

    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
