//! Icon resolution for sidebar entries
//!
//! Icon names in the config are abstract identifiers ("monitor", "wifi").
//! The resolver maps them to something renderable; with egui's built-in
//! fonts that is an emoji glyph. Unknown names resolve to `None` and the
//! sidebar falls back to a label-only button.

/// Maps an icon identifier to a renderable glyph.
pub trait IconResolver {
    fn resolve(&self, icon_name: &str) -> Option<&str>;
}

/// Built-in resolver backed by a static name-to-glyph table.
#[derive(Debug, Default)]
pub struct GlyphIconResolver;

impl IconResolver for GlyphIconResolver {
    fn resolve(&self, icon_name: &str) -> Option<&str> {
        match icon_name {
            "settings" => Some("⚙"),
            "monitor" => Some("🖥"),
            "volume-up" => Some("🔊"),
            "wifi" => Some("🌐"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_builtin_names() {
        let resolver = GlyphIconResolver;
        assert_eq!(resolver.resolve("settings"), Some("⚙"));
        assert_eq!(resolver.resolve("wifi"), Some("🌐"));
    }

    #[test]
    fn test_unknown_name_resolves_to_none() {
        let resolver = GlyphIconResolver;
        assert_eq!(resolver.resolve("bluetooth"), None);
        assert_eq!(resolver.resolve(""), None);
    }
}
