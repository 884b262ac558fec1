//! Content panels for the selected category
//!
//! Panels are placeholders: each renders a heading and a short description,
//! no actual system settings are read or written. A category id with no
//! registered panel is a recoverable error that the shell renders inline in
//! the content region instead of aborting.

use egui::{RichText, Ui};

use crate::config::CategoryEntry;
use crate::gui::theme::{TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};

/// Error type for panel lookup
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("no panel registered for category '{0}'")]
    NoPanel(String),
}

/// The built-in panel kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    System,
    Display,
    Sound,
    Network,
}

/// Map a category id to its built-in panel.
pub fn panel_kind(id: &str) -> Result<PanelKind, PanelError> {
    match id {
        "system" => Ok(PanelKind::System),
        "display" => Ok(PanelKind::Display),
        "sound" => Ok(PanelKind::Sound),
        "network" => Ok(PanelKind::Network),
        other => Err(PanelError::NoPanel(other.to_string())),
    }
}

impl PanelKind {
    fn description(&self) -> &'static str {
        match self {
            PanelKind::System => "Host information, updates and defaults.",
            PanelKind::Display => "Resolution, scaling and monitor layout.",
            PanelKind::Sound => "Output devices, volume and sound packs.",
            PanelKind::Network => "Wired and wireless connections.",
        }
    }
}

/// Builds the content view for a category.
pub trait PanelProvider {
    fn render(&self, ui: &mut Ui, category: &CategoryEntry) -> Result<(), PanelError>;
}

/// Placeholder panels for the built-in categories.
#[derive(Debug, Default)]
pub struct BuiltinPanels;

impl PanelProvider for BuiltinPanels {
    fn render(&self, ui: &mut Ui, category: &CategoryEntry) -> Result<(), PanelError> {
        let kind = panel_kind(&category.id)?;

        ui.label(
            RichText::new(&category.label)
                .size(20.0)
                .strong()
                .color(TEXT_PRIMARY),
        );
        ui.add_space(4.0);
        ui.label(RichText::new(kind.description()).color(TEXT_DIM));
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(12.0);
        ui.label(RichText::new("Nothing to configure here yet.").color(TEXT_MUTED));

        Ok(())
    }
}
