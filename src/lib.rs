//! Control Center - a minimal desktop settings shell
//!
//! A single window with a fixed-width sidebar of category buttons and a
//! content region that shows the panel for the selected category. The
//! category list is data-driven: it is loaded from a TOML config file and
//! defaults to the four built-in categories (System, Display, Sound,
//! Network).
//!
//! Panels are placeholders - this shell does not read or mutate any actual
//! system settings.

pub mod config;
pub mod gui;

pub use config::{CategoryEntry, Config};
