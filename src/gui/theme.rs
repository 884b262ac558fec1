//! GUI theme: muted slate palette
//!
//! Color constants for the control center shell.

use egui::{Color32, Context, Stroke};

/// Window and content background
pub const BG_PRIMARY: Color32 = Color32::from_rgb(24, 26, 31);
/// Sidebar and frame background
pub const BG_SECONDARY: Color32 = Color32::from_rgb(31, 34, 41);
/// Hovered widget background
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(44, 49, 60);
/// Selected sidebar entry background
pub const BG_SELECTED: Color32 = Color32::from_rgb(54, 63, 80);

/// Primary text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(222, 226, 235);
/// Secondary text
pub const TEXT_DIM: Color32 = Color32::from_rgb(150, 156, 168);
/// Muted text
pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 106, 118);

pub const ACCENT_BLUE: Color32 = Color32::from_rgb(100, 160, 255);
pub const ACCENT_RED: Color32 = Color32::from_rgb(240, 100, 100);

/// Apply the dark theme to the egui context.
pub fn apply_theme(ctx: &Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_PRIMARY;
    style.visuals.extreme_bg_color = BG_SECONDARY;
    style.visuals.widgets.noninteractive.bg_fill = BG_SECONDARY;
    style.visuals.widgets.inactive.bg_fill = BG_SECONDARY;
    style.visuals.widgets.hovered.bg_fill = BG_HIGHLIGHT;
    style.visuals.widgets.active.bg_fill = BG_SELECTED;
    style.visuals.selection.bg_fill = BG_SELECTED;
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT_BLUE);
    ctx.set_style(style);
}
