//! State types shared by the launcher and its dialogs.

use std::fmt;

/// Tool dialogs this launcher can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    PointWorldText,
}

impl Tool {
    pub const ALL: &'static [Tool] = &[Tool::PointWorldText];

    /// Key used in the settings file (`visible_buttons`, `button_order`).
    pub fn key(self) -> &'static str {
        match self {
            Tool::PointWorldText => "point_worldtext",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tool::PointWorldText => "point_worldtext Generator",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Addon folders available to the dialog, or why there are none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddonListing {
    Loaded(Vec<String>),
    Failed(String),
}

impl AddonListing {
    /// Enumerate `addons_path`, turning failure into a displayable entry.
    pub fn scan(addons_path: &std::path::Path) -> Self {
        match crate::addons::list_addons(addons_path) {
            Ok(names) => AddonListing::Loaded(names),
            Err(e) => {
                tracing::warn!("cannot list addons in {}: {e}", addons_path.display());
                AddonListing::Failed(e.to_string())
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        matches!(self, AddonListing::Loaded(names) if names.iter().any(|n| n == name))
    }

    /// Label for the selector when nothing can be chosen.
    pub fn unavailable_label(&self) -> Option<String> {
        match self {
            AddonListing::Failed(reason) => Some(format!("Error: {reason}")),
            AddonListing::Loaded(names) if names.is_empty() => Some("No addons found".to_string()),
            AddonListing::Loaded(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_keys_round_trip() {
        for &tool in Tool::ALL {
            assert_eq!(Tool::from_key(tool.key()), Some(tool));
        }
        assert_eq!(Tool::from_key("vtf2png"), None);
    }

    #[test]
    fn test_listing_labels() {
        let failed = AddonListing::Failed("access denied".into());
        assert_eq!(failed.unavailable_label().as_deref(), Some("Error: access denied"));
        assert!(!failed.contains("kz_lego"));

        let empty = AddonListing::Loaded(vec![]);
        assert_eq!(empty.unavailable_label().as_deref(), Some("No addons found"));

        let loaded = AddonListing::Loaded(vec!["kz_lego".into()]);
        assert_eq!(loaded.unavailable_label(), None);
        assert!(loaded.contains("kz_lego"));
        assert!(!loaded.contains("kz_other"));
    }
}
