//! CS2 addon folder enumeration.
//!
//! Addons live as plain directories under `content/csgo_addons` of the game
//! install. Only the listing is done here; nothing inside an addon is read.

use std::path::{Path, PathBuf};

use crate::Result;

/// Default CS2 addon content directory on a stock Steam install.
pub const DEFAULT_ADDONS_PATH: &str = r"C:\Program Files (x86)\Steam\steamapps\common\Counter-Strike Global Offensive\content\csgo_addons";

pub fn default_addons_path() -> PathBuf {
    PathBuf::from(DEFAULT_ADDONS_PATH)
}

/// List addon folder names under `addons_path`, sorted case-insensitively.
///
/// Hidden directories and plain files are skipped.
pub fn list_addons(addons_path: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(addons_path)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        names.push(name);
    }
    names.sort_by_key(|n| n.to_lowercase());
    tracing::debug!(count = names.len(), path = %addons_path.display(), "listed addons");
    Ok(names)
}
