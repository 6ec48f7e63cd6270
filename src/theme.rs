//! Shared theme colors for every tool window.
//!
//! The active theme name lives in the launcher settings file
//! (`appearance_mode`). Windows poll [`ThemeManager::check_for_updates`] so a
//! theme change made anywhere is picked up without a restart.

use std::path::PathBuf;
use std::time::SystemTime;

use crate::config::{modified, Settings};

/// RGBA color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba(pub f32, pub f32, pub f32, pub f32);

impl Rgba {
    const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }
}

impl From<Rgba> for iced::Color {
    fn from(c: Rgba) -> Self {
        iced::Color::from_rgba(c.0, c.1, c.2, c.3)
    }
}

/// Color roles every tool window draws with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub window_bg: Rgba,
    pub title_bar_bg: Rgba,
    pub button: Rgba,
    pub button_hover: Rgba,
    pub button_active: Rgba,
    pub border: Rgba,
    pub text: Rgba,
    pub accent: Rgba,
}

pub const DEFAULT_THEME: &str = "grey";

/// All built-in themes, in the order the launcher lists them.
pub const THEMES: &[(&str, ThemeColors)] = &[
    ("grey", ThemeColors {
        window_bg: Rgba::rgb(0.1, 0.1, 0.1),
        title_bar_bg: Rgba::rgb(0.12, 0.12, 0.12),
        button: Rgba::rgb(0.29, 0.29, 0.29),
        button_hover: Rgba::rgb(0.35, 0.35, 0.35),
        button_active: Rgba::rgb(0.40, 0.40, 0.40),
        border: Rgba::rgb(0.40, 0.40, 0.40),
        text: Rgba::rgb(1.0, 1.0, 1.0),
        accent: Rgba::rgb(1.0, 0.6, 0.0),
    }),
    ("black", ThemeColors {
        window_bg: Rgba::rgb(0.0, 0.0, 0.0),
        title_bar_bg: Rgba::rgb(0.02, 0.02, 0.02),
        button: Rgba::rgb(0.15, 0.15, 0.15),
        button_hover: Rgba::rgb(0.20, 0.20, 0.20),
        button_active: Rgba::rgb(0.25, 0.25, 0.25),
        border: Rgba::rgb(0.30, 0.30, 0.30),
        text: Rgba::rgb(1.0, 1.0, 1.0),
        accent: Rgba::rgb(1.0, 0.6, 0.0),
    }),
    ("white", ThemeColors {
        window_bg: Rgba::rgb(0.94, 0.94, 0.94),
        title_bar_bg: Rgba::rgb(0.90, 0.90, 0.90),
        button: Rgba::rgb(0.75, 0.75, 0.75),
        button_hover: Rgba::rgb(0.70, 0.70, 0.70),
        button_active: Rgba::rgb(0.65, 0.65, 0.65),
        border: Rgba::rgb(0.60, 0.60, 0.60),
        text: Rgba::rgb(0.1, 0.1, 0.1),
        accent: Rgba::rgb(1.0, 0.6, 0.0),
    }),
    ("dracula", ThemeColors {
        window_bg: Rgba::rgb(0.157, 0.165, 0.212),
        title_bar_bg: Rgba::rgb(0.121, 0.129, 0.173),
        button: Rgba::rgb(0.271, 0.282, 0.353),
        button_hover: Rgba::rgb(0.506, 0.475, 0.702),
        button_active: Rgba::rgb(0.380, 0.345, 0.580),
        border: Rgba::rgb(0.380, 0.396, 0.486),
        text: Rgba::rgb(0.973, 0.973, 0.949),
        accent: Rgba::rgb(0.506, 0.475, 0.702),
    }),
    ("pink", ThemeColors {
        window_bg: Rgba::rgb(0.25, 0.12, 0.18),
        title_bar_bg: Rgba::rgb(0.20, 0.10, 0.15),
        button: Rgba::rgb(0.55, 0.25, 0.40),
        button_hover: Rgba::rgb(0.65, 0.30, 0.48),
        button_active: Rgba::rgb(0.75, 0.35, 0.55),
        border: Rgba::rgb(0.80, 0.40, 0.60),
        text: Rgba::rgb(1.0, 0.95, 0.98),
        accent: Rgba::rgb(1.0, 0.4, 0.7),
    }),
    ("orange", ThemeColors {
        window_bg: Rgba::rgb(0.25, 0.15, 0.08),
        title_bar_bg: Rgba::rgb(0.20, 0.12, 0.06),
        button: Rgba::rgb(0.60, 0.35, 0.15),
        button_hover: Rgba::rgb(0.70, 0.40, 0.18),
        button_active: Rgba::rgb(0.80, 0.45, 0.20),
        border: Rgba::rgb(0.85, 0.50, 0.25),
        text: Rgba::rgb(1.0, 0.98, 0.95),
        accent: Rgba::rgb(1.0, 0.6, 0.0),
    }),
    ("blue", ThemeColors {
        window_bg: Rgba::rgb(0.08, 0.12, 0.25),
        title_bar_bg: Rgba::rgb(0.06, 0.10, 0.20),
        button: Rgba::rgb(0.20, 0.30, 0.60),
        button_hover: Rgba::rgb(0.25, 0.35, 0.70),
        button_active: Rgba::rgb(0.30, 0.40, 0.80),
        border: Rgba::rgb(0.35, 0.45, 0.85),
        text: Rgba::rgb(0.95, 0.98, 1.0),
        accent: Rgba::rgb(0.3, 0.5, 1.0),
    }),
    ("red", ThemeColors {
        window_bg: Rgba::rgb(0.25, 0.08, 0.08),
        title_bar_bg: Rgba::rgb(0.20, 0.06, 0.06),
        button: Rgba::rgb(0.60, 0.20, 0.20),
        button_hover: Rgba::rgb(0.70, 0.25, 0.25),
        button_active: Rgba::rgb(0.80, 0.30, 0.30),
        border: Rgba::rgb(0.85, 0.35, 0.35),
        text: Rgba::rgb(1.0, 0.95, 0.95),
        accent: Rgba::rgb(1.0, 0.3, 0.3),
    }),
    ("green", ThemeColors {
        window_bg: Rgba::rgb(0.08, 0.18, 0.08),
        title_bar_bg: Rgba::rgb(0.06, 0.15, 0.06),
        button: Rgba::rgb(0.20, 0.50, 0.20),
        button_hover: Rgba::rgb(0.25, 0.60, 0.25),
        button_active: Rgba::rgb(0.30, 0.70, 0.30),
        border: Rgba::rgb(0.35, 0.75, 0.35),
        text: Rgba::rgb(0.95, 1.0, 0.95),
        accent: Rgba::rgb(0.3, 1.0, 0.3),
    }),
    ("yellow", ThemeColors {
        window_bg: Rgba::rgb(0.5, 0.5, 0.0),
        title_bar_bg: Rgba::rgb(0.4, 0.4, 0.0),
        button: Rgba::rgb(0.60, 0.55, 0.15),
        button_hover: Rgba::rgb(0.70, 0.65, 0.20),
        button_active: Rgba::rgb(0.80, 0.75, 0.25),
        border: Rgba::rgb(0.85, 0.80, 0.30),
        text: Rgba::rgb(1.0, 1.0, 0.90),
        accent: Rgba::rgb(1.0, 1.0, 0.0),
    }),
];

/// Look up a built-in theme by name.
pub fn theme_colors(name: &str) -> Option<ThemeColors> {
    THEMES.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}

/// Names of all built-in themes.
pub fn theme_names() -> Vec<String> {
    THEMES.iter().map(|(n, _)| n.to_string()).collect()
}

/// Format a color as `#rrggbb`, ignoring alpha.
pub fn to_hex(color: Rgba) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", channel(color.0), channel(color.1), channel(color.2))
}

/// Source of the colors a window paints itself with.
pub trait ThemeProvider {
    fn colors(&self) -> ThemeColors;
    fn name(&self) -> &str;
}

/// Reads the active theme from the settings file and watches it for changes.
#[derive(Debug)]
pub struct ThemeManager {
    settings_file: PathBuf,
    last_mtime: Option<SystemTime>,
    current: String,
}

impl ThemeManager {
    pub fn new(settings_file: impl Into<PathBuf>) -> Self {
        let mut manager = Self {
            settings_file: settings_file.into(),
            last_mtime: None,
            current: DEFAULT_THEME.to_string(),
        };
        manager.reload();
        manager
    }

    /// Theme manager pinned to `name`; never reloads from disk.
    pub fn fixed(name: &str) -> Self {
        let current = if theme_colors(name).is_some() { name } else { DEFAULT_THEME };
        Self {
            settings_file: PathBuf::new(),
            last_mtime: None,
            current: current.to_string(),
        }
    }

    fn reload(&mut self) {
        self.last_mtime = modified(&self.settings_file);
        let settings = Settings::load_from(&self.settings_file);
        self.current = if theme_colors(&settings.appearance_mode).is_some() {
            settings.appearance_mode
        } else {
            DEFAULT_THEME.to_string()
        };
        tracing::debug!(theme = %self.current, "theme loaded");
    }

    /// Switch to `name` immediately. Unknown names are ignored.
    pub fn select(&mut self, name: &str) -> bool {
        if theme_colors(name).is_none() {
            return false;
        }
        self.current = name.to_string();
        self.last_mtime = modified(&self.settings_file);
        true
    }

    /// Reload when the settings file changed since the last read.
    /// Returns whether a reload happened.
    pub fn check_for_updates(&mut self) -> bool {
        if self.settings_file.as_os_str().is_empty() {
            return false;
        }
        match (modified(&self.settings_file), self.last_mtime) {
            (Some(now), Some(last)) if now <= last => false,
            (Some(_), _) => {
                self.reload();
                true
            }
            (None, _) => false,
        }
    }
}

impl ThemeProvider for ThemeManager {
    fn colors(&self) -> ThemeColors {
        theme_colors(&self.current).unwrap_or(THEMES[0].1)
    }

    fn name(&self) -> &str {
        &self.current
    }
}
