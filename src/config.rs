//! Launcher settings persistence.
//!
//! Stores user preferences (theme, launcher button visibility and order) as
//! JSON at `<temp>/.CS2KZ-mapping-tools/settings.json`. The file is shared with
//! the legacy launcher, so keys this crate does not know about are carried
//! through untouched on save.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::Result;

/// Directory name under the system temp dir that holds all tool state.
pub const APP_DIR_NAME: &str = ".CS2KZ-mapping-tools";

/// Launcher tool keys in their default order.
pub const DEFAULT_BUTTON_ORDER: &[&str] = &[
    "mapping",
    "listen",
    "dedicated_server",
    "insecure",
    "source2viewer",
    "cs2importer",
    "skyboxconverter",
    "loading_screen",
    "point_worldtext",
    "vtf2png",
    "sounds",
];

/// Tools hidden unless the user turns them on.
const HIDDEN_BY_DEFAULT: &[&str] = &["dedicated_server", "insecure", "vtf2png"];

/// Directory that holds the settings file and scratch output.
pub fn app_dir() -> PathBuf {
    std::env::temp_dir().join(APP_DIR_NAME)
}

/// Default settings file path.
pub fn default_path() -> PathBuf {
    app_dir().join("settings.json")
}

/// Modification time of `path`, if it exists.
pub(crate) fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Persisted launcher settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Theme name read by [`crate::theme::ThemeManager`].
    #[serde(default = "default_appearance")]
    pub appearance_mode: String,
    #[serde(default = "default_visible_buttons")]
    pub visible_buttons: BTreeMap<String, bool>,
    #[serde(default = "default_button_order")]
    pub button_order: Vec<String>,
    #[serde(default)]
    pub window_position: Option<[i32; 2]>,
    /// Keys owned by other tools.
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
    /// Path the settings were loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
    /// File mtime when last read or written.
    #[serde(skip)]
    synced_at: Option<SystemTime>,
}

fn default_appearance() -> String { "grey".into() }

fn default_visible_buttons() -> BTreeMap<String, bool> {
    DEFAULT_BUTTON_ORDER
        .iter()
        .map(|&name| (name.to_string(), !HIDDEN_BY_DEFAULT.contains(&name)))
        .collect()
}

fn default_button_order() -> Vec<String> {
    DEFAULT_BUTTON_ORDER.iter().map(|s| s.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            appearance_mode: default_appearance(),
            visible_buttons: default_visible_buttons(),
            button_order: default_button_order(),
            window_position: None,
            extra: serde_json::Map::new(),
            path: default_path(),
            synced_at: None,
        }
    }
}

impl Settings {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(default_path())
    }

    /// Load from `path`, falling back to defaults on any error.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut settings = match Self::read(&path) {
            Ok(Some(settings)) => settings,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("ignoring settings at {}: {e}", path.display());
                Self::default()
            }
        };
        settings.merge_defaults();
        settings.synced_at = modified(&path);
        settings.path = path;
        settings
    }

    /// Re-read the file if another process changed it since the last sync.
    /// Returns whether anything was reloaded.
    pub fn refresh(&mut self) -> bool {
        let now = modified(&self.path);
        if now.is_none() || now <= self.synced_at {
            return false;
        }
        *self = Self::load_from(self.path.clone());
        true
    }

    /// Read and parse the file. `Ok(None)` when it is missing or empty.
    fn read(path: &Path) -> Result<Option<Self>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if contents.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Add tools introduced since the file was written.
    fn merge_defaults(&mut self) {
        for (name, visible) in default_visible_buttons() {
            self.visible_buttons.entry(name).or_insert(visible);
        }
        for name in DEFAULT_BUTTON_ORDER {
            if !self.button_order.iter().any(|b| b == name) {
                self.button_order.push(name.to_string());
            }
        }
    }

    /// Path this configuration is persisted to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist current settings to disk.
    pub fn save(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, json)?;
        self.synced_at = modified(&self.path);
        Ok(())
    }

    /// Whether the launcher should show the button for `tool`.
    pub fn is_visible(&self, tool: &str) -> bool {
        self.visible_buttons.get(tool).copied().unwrap_or(false)
    }

    /// Position of `tool` in the launcher, if ordered.
    pub fn order_of(&self, tool: &str) -> Option<usize> {
        self.button_order.iter().position(|b| b == tool)
    }

    /// Persist `name` as the theme. The file is re-read first so keys other
    /// tools wrote since the last sync survive.
    pub fn set_theme(&mut self, name: &str) -> Result<()> {
        match Self::read(&self.path) {
            Ok(Some(mut latest)) => {
                latest.merge_defaults();
                latest.path = std::mem::take(&mut self.path);
                *self = latest;
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("overwriting unreadable settings: {e}"),
        }
        self.appearance_mode = name.to_string();
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(dir.path().join("settings.json"));
        assert_eq!(settings.appearance_mode, "grey");
        assert!(settings.is_visible("point_worldtext"));
        assert!(!settings.is_visible("insecure"));
        assert_eq!(settings.button_order.len(), DEFAULT_BUTTON_ORDER.len());
    }

    #[test]
    fn test_empty_and_malformed_files_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        std::fs::write(&path, "").unwrap();
        assert_eq!(Settings::load_from(&path).appearance_mode, "grey");

        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&path).appearance_mode, "grey");
    }

    #[test]
    fn test_merge_adds_new_tools() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"appearance_mode": "dracula",
                "visible_buttons": {"point_worldtext": false},
                "button_order": ["sounds", "point_worldtext"]}"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.appearance_mode, "dracula");
        assert!(!settings.is_visible("point_worldtext"));
        assert!(settings.is_visible("mapping"));
        assert_eq!(settings.order_of("sounds"), Some(0));
        assert_eq!(settings.order_of("point_worldtext"), Some(1));
        assert_eq!(settings.button_order.len(), DEFAULT_BUTTON_ORDER.len());
    }

    #[test]
    fn test_save_preserves_foreign_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"compact_mode": true, "source2viewer_path": "C:/S2V.exe"}"#)
            .unwrap();

        let mut settings = Settings::load_from(&path);
        settings.set_theme("blue").unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["appearance_mode"], "blue");
        assert_eq!(raw["compact_mode"], true);
        assert_eq!(raw["source2viewer_path"], "C:/S2V.exe");
    }

    fn touch_later(path: &Path) {
        let later = SystemTime::now() + std::time::Duration::from_secs(5);
        std::fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(later)
            .unwrap();
    }

    #[test]
    fn test_set_theme_keeps_keys_written_after_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"appearance_mode": "red"}"#).unwrap();
        let mut settings = Settings::load_from(&path);

        std::fs::write(&path, r#"{"appearance_mode": "red", "source2viewer_path": "C:/S2V.exe"}"#)
            .unwrap();
        settings.set_theme("blue").unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["appearance_mode"], "blue");
        assert_eq!(raw["source2viewer_path"], "C:/S2V.exe");
        assert_eq!(settings.path(), path.as_path());
    }

    #[test]
    fn test_refresh_only_after_external_change() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::load_from(&path);
        assert!(!settings.refresh());

        settings.set_theme("pink").unwrap();
        assert!(!settings.refresh());

        std::fs::write(&path, r#"{"appearance_mode": "green"}"#).unwrap();
        touch_later(&path);
        assert!(settings.refresh());
        assert_eq!(settings.appearance_mode, "green");
        assert!(!settings.refresh());
    }
}
