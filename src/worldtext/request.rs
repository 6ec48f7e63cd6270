//! The completion event and the values it carries.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Folder inside an addon that generated files are written to.
pub const MATERIALS_SUBDIR: &str = "materials/point_worldtext";

/// Bitmap dimensions offered by the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TextureSize {
    pub width: u32,
    pub height: u32,
}

impl TextureSize {
    pub const DEFAULT: TextureSize = TextureSize::new(1024, 512);

    /// Presets listed in the size selector.
    pub const PRESETS: &'static [TextureSize] = &[
        TextureSize::new(256, 256),
        TextureSize::new(512, 128),
        TextureSize::new(512, 256),
        TextureSize::new(512, 512),
        TextureSize::new(1024, 256),
        TextureSize::new(1024, 512),
        TextureSize::new(1024, 1024),
        TextureSize::new(2048, 512),
        TextureSize::new(2048, 1024),
        TextureSize::new(2048, 2048),
        TextureSize::new(4096, 1024),
        TextureSize::new(4096, 2048),
    ];

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Edge lengths the texture compiler accepts: 8·2ⁿ for n in 0..=10.
    pub fn is_valid_edge(edge: u32) -> bool {
        (8..=8192).contains(&edge) && edge.is_power_of_two()
    }
}

impl Default for TextureSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TextureSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Where the generator should write its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Addon(String),
    Path(PathBuf),
}

/// Emitted once when the user confirms the dialog.
///
/// Exactly one of `output_path` and `addon_name` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub text: String,
    pub output_path: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub generate_material: bool,
    pub addon_name: Option<String>,
    /// Sanitized file stem, without extension.
    pub filename: String,
}

impl GenerateRequest {
    pub fn target(&self) -> OutputTarget {
        match (&self.addon_name, &self.output_path) {
            (Some(addon), _) => OutputTarget::Addon(addon.clone()),
            (None, Some(path)) => OutputTarget::Path(path.clone()),
            (None, None) => OutputTarget::Path(PathBuf::new()),
        }
    }

    pub fn size(&self) -> TextureSize {
        TextureSize::new(self.width, self.height)
    }

    /// Directory the bitmap (and material) end up in.
    pub fn output_dir(&self, addons_root: &Path) -> PathBuf {
        match self.target() {
            OutputTarget::Addon(addon) => addons_root.join(addon).join(MATERIALS_SUBDIR),
            OutputTarget::Path(path) => path,
        }
    }

    pub fn image_file_name(&self) -> String {
        format!("{}.png", self.filename)
    }

    pub fn material_file_name(&self) -> Option<String> {
        self.generate_material.then(|| format!("{}.vmat", self.filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(addon: Option<&str>, path: Option<&str>) -> GenerateRequest {
        GenerateRequest {
            text: "Start".into(),
            output_path: path.map(PathBuf::from),
            width: 512,
            height: 128,
            generate_material: true,
            addon_name: addon.map(str::to_string),
            filename: "start".into(),
        }
    }

    #[test]
    fn test_valid_edges() {
        assert!(TextureSize::is_valid_edge(8));
        assert!(TextureSize::is_valid_edge(8192));
        assert!(!TextureSize::is_valid_edge(4));
        assert!(!TextureSize::is_valid_edge(16384));
        assert!(!TextureSize::is_valid_edge(1000));
        assert!(TextureSize::PRESETS.iter().all(|s| {
            TextureSize::is_valid_edge(s.width) && TextureSize::is_valid_edge(s.height)
        }));
    }

    #[test]
    fn test_display_and_default() {
        assert_eq!(TextureSize::new(2048, 1024).to_string(), "2048x1024");
        assert!(TextureSize::PRESETS.contains(&TextureSize::DEFAULT));
    }

    #[test]
    fn test_addon_output_dir() {
        let req = request(Some("kz_lego"), None);
        assert_eq!(req.target(), OutputTarget::Addon("kz_lego".into()));
        assert_eq!(
            req.output_dir(Path::new("/cs2/csgo_addons")),
            Path::new("/cs2/csgo_addons/kz_lego/materials/point_worldtext")
        );
    }

    #[test]
    fn test_path_output_dir() {
        let req = request(None, Some("/tmp/out"));
        assert_eq!(req.output_dir(Path::new("/ignored")), PathBuf::from("/tmp/out"));
        assert_eq!(req.image_file_name(), "start.png");
        assert_eq!(req.material_file_name().as_deref(), Some("start.vmat"));
    }

    #[test]
    fn test_serializes_empty_path_as_null() {
        let json = serde_json::to_value(request(Some("kz_lego"), None)).unwrap();
        assert_eq!(json["output_path"], serde_json::Value::Null);
        assert_eq!(json["addon_name"], "kz_lego");
        assert_eq!(json["width"], 512);
    }
}
