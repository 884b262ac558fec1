//! Main application state and the eframe update loop

use egui::{CentralPanel, Context, Frame, RichText};
use tracing::debug;

use crate::config::Config;
use crate::gui::icons::GlyphIconResolver;
use crate::gui::panels::{BuiltinPanels, PanelProvider};
use crate::gui::sidebar::render_sidebar;
use crate::gui::theme::{self, ACCENT_RED, BG_PRIMARY};

/// Which category's panel occupies the content region.
///
/// The shell starts with nothing selected; the only transition is a sidebar
/// click, which replaces the content region's child.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Category(String),
}

impl Selection {
    /// Transition to the given category. Re-selecting the current category
    /// is a no-op.
    pub fn select(&mut self, id: &str) {
        if !self.is(id) {
            *self = Selection::Category(id.to_string());
        }
    }

    pub fn is(&self, id: &str) -> bool {
        matches!(self, Selection::Category(selected) if selected == id)
    }
}

/// The control center shell: one window, sidebar plus content region.
pub struct ControlCenterApp {
    config: Config,
    selection: Selection,
    icons: GlyphIconResolver,
    panels: BuiltinPanels,
}

impl ControlCenterApp {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            selection: Selection::None,
            icons: GlyphIconResolver,
            panels: BuiltinPanels,
        }
    }

    fn render_content(&self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                // Empty until a category is picked. A selection whose id is
                // no longer configured also renders nothing.
                let Selection::Category(id) = &self.selection else {
                    return;
                };
                let Some(category) = self.config.category(id) else {
                    return;
                };

                // A broken panel degrades to an inline message, it never
                // takes the shell down.
                if let Err(e) = self.panels.render(ui, category) {
                    ui.label(RichText::new(e.to_string()).color(ACCENT_RED));
                }
            });
    }
}

impl eframe::App for ControlCenterApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        theme::apply_theme(ctx);

        let clicked = render_sidebar(
            ctx,
            &self.config.categories,
            &self.selection,
            &self.icons,
            self.config.window.sidebar_width,
        );

        if let Some(id) = clicked {
            debug!("selected category: {}", id);
            self.selection.select(&id);
        }

        self.render_content(ctx);
    }
}
