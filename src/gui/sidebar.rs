//! Sidebar rendering
//!
//! A fixed-width, non-resizable left panel with one full-width button per
//! configured category, in declaration order. Rendering attaches no behavior
//! beyond reporting which entry was clicked.

use egui::{Button, Context, Frame, Response, RichText, SidePanel, Ui};

use crate::config::CategoryEntry;
use crate::gui::app::Selection;
use crate::gui::icons::IconResolver;
use crate::gui::theme::{BG_SECONDARY, BG_SELECTED, TEXT_PRIMARY};

const BUTTON_HEIGHT: f32 = 32.0;

/// Render the sidebar and return the id of the clicked category, if any.
pub fn render_sidebar(
    ctx: &Context,
    categories: &[CategoryEntry],
    selection: &Selection,
    icons: &dyn IconResolver,
    width: f32,
) -> Option<String> {
    let mut clicked = None;

    SidePanel::left("sidebar")
        .exact_width(width)
        .resizable(false)
        .frame(Frame::new().fill(BG_SECONDARY).inner_margin(8.0))
        .show(ctx, |ui| {
            for category in categories {
                if sidebar_button(ui, category, selection.is(&category.id), icons).clicked() {
                    clicked = Some(category.id.clone());
                }
                ui.add_space(4.0);
            }
        });

    clicked
}

/// One full-width category button. The label is rendered verbatim; the icon
/// glyph is prefixed only when the resolver knows the icon name.
fn sidebar_button(
    ui: &mut Ui,
    category: &CategoryEntry,
    selected: bool,
    icons: &dyn IconResolver,
) -> Response {
    let text = match icons.resolve(&category.icon) {
        Some(glyph) => format!("{}  {}", glyph, category.label),
        None => category.label.clone(),
    };

    let mut button = Button::new(RichText::new(text).color(TEXT_PRIMARY));
    if selected {
        button = button.fill(BG_SELECTED);
    }

    ui.add_sized([ui.available_width(), BUTTON_HEIGHT], button)
}
