//! Field state and validation for the point_worldtext dialog.

use std::path::PathBuf;
use thiserror::Error;

use super::filename::{sanitize_filename, sanitize_stem};
use super::request::{GenerateRequest, TextureSize};

/// Which of the two mutually exclusive output controls is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Addon,
    CustomPath,
}

/// Reasons the dialog refuses to emit a request. The message is shown to the
/// user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter some text to generate.")]
    EmptyText,

    #[error("Please select a valid addon.")]
    NoAddonSelected,

    #[error("Please choose an output folder.")]
    EmptyPath,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorldTextForm {
    pub text: String,
    pub size: TextureSize,
    pub mode: OutputMode,
    /// Selected addon folder; `None` until a real addon is picked.
    pub addon: Option<String>,
    pub custom_path: String,
    /// Replaces the text-derived filename when not blank.
    pub filename_override: String,
    pub generate_material: bool,
}

impl Default for WorldTextForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            size: TextureSize::DEFAULT,
            mode: OutputMode::Addon,
            addon: None,
            custom_path: String::new(),
            filename_override: String::new(),
            generate_material: true,
        }
    }
}

impl WorldTextForm {
    /// Text as it will be rendered: trailing newlines dropped, inner ones kept.
    pub fn content(&self) -> &str {
        self.text.trim_end_matches(['\n', '\r'])
    }

    /// File stem the generator will use. An override that sanitizes to
    /// nothing is ignored in favour of the text-derived name.
    pub fn effective_filename(&self) -> String {
        sanitize_stem(&self.filename_override)
            .unwrap_or_else(|| sanitize_filename(self.content()))
    }

    /// Live preview of the files that will be written.
    pub fn filename_preview(&self) -> String {
        let name = self.effective_filename();
        if self.generate_material {
            format!("{name}.png + {name}.vmat")
        } else {
            format!("{name}.png")
        }
    }

    pub fn shows_addon_selector(&self) -> bool {
        self.mode == OutputMode::Addon
    }

    pub fn shows_path_input(&self) -> bool {
        self.mode == OutputMode::CustomPath
    }

    /// Check required fields and build the completion request.
    pub fn validate(&self) -> Result<GenerateRequest, FormError> {
        let text = self.content();
        if text.trim().is_empty() {
            return Err(FormError::EmptyText);
        }

        let (output_path, addon_name) = match self.mode {
            OutputMode::Addon => {
                let addon = self
                    .addon
                    .as_deref()
                    .filter(|a| !a.trim().is_empty())
                    .ok_or(FormError::NoAddonSelected)?;
                (None, Some(addon.to_string()))
            }
            OutputMode::CustomPath => {
                let path = self.custom_path.trim();
                if path.is_empty() {
                    return Err(FormError::EmptyPath);
                }
                (Some(PathBuf::from(path)), None)
            }
        };

        Ok(GenerateRequest {
            text: text.to_string(),
            output_path,
            width: self.size.width,
            height: self.size.height,
            generate_material: self.generate_material,
            addon_name,
            filename: self.effective_filename(),
        })
    }
}
