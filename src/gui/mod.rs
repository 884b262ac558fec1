//! GUI module for the control center shell
//!
//! One window: a fixed-width sidebar of category buttons on the left, a
//! content region on the right that shows the selected category's panel.

pub mod app;
pub mod icons;
pub mod panels;
pub mod runner;
pub mod sidebar;
pub mod theme;

pub use app::{ControlCenterApp, Selection};
pub use icons::{GlyphIconResolver, IconResolver};
pub use panels::{BuiltinPanels, PanelError, PanelProvider};
pub use runner::run_gui;
