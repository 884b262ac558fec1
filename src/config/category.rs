//! Category records for the sidebar
//!
//! The sidebar is data-driven: it renders whatever ordered list of
//! categories the config provides. The built-in default is the canonical
//! four-entry list.

use serde::{Deserialize, Serialize};

/// One sidebar entry: a stable id, the exact display label, and the name of
/// the icon to look up through the [`IconResolver`](crate::gui::icons::IconResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Stable identifier used for selection and panel lookup
    pub id: String,

    /// Display label, rendered verbatim on the sidebar button
    pub label: String,

    /// Icon identifier; rendering degrades to label-only when unresolvable
    #[serde(default)]
    pub icon: String,
}

impl CategoryEntry {
    pub fn new(id: &str, label: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// The built-in category list, in sidebar order.
pub fn default_categories() -> Vec<CategoryEntry> {
    vec![
        CategoryEntry::new("system", "System", "settings"),
        CategoryEntry::new("display", "Display", "monitor"),
        CategoryEntry::new("sound", "Sound", "volume-up"),
        CategoryEntry::new("network", "Network", "wifi"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories_order() {
        let categories = default_categories();
        assert_eq!(categories.len(), 4);
        let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["system", "display", "sound", "network"]);
    }

    #[test]
    fn test_default_labels_are_exact() {
        let labels: Vec<String> = default_categories().into_iter().map(|c| c.label).collect();
        assert_eq!(labels, ["System", "Display", "Sound", "Network"]);
    }
}
