//! Iced-based launcher and tool dialogs.
//!
//! This module is split into several submodules:
//! - `app`: App struct and initialization
//! - `state`: Tool list and addon listing state
//! - `styles`: Theme-driven style functions and palette
//! - `view`: App::view(), subscription and the modal helper
//! - `update`: App::update() and message handling
//! - `dialog`: The point_worldtext configuration dialog

mod app;
pub mod dialog;
mod state;
pub mod styles;
mod update;
mod view;

use std::path::PathBuf;

pub use app::App;
pub use dialog::{DialogAction, DialogMessage, PointWorldTextDialog};
pub use state::{AddonListing, Tool};
pub use styles::Palette;

use app::INIT_OPTIONS;

/// Application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// Launcher button pressed.
    OpenTool(Tool),
    /// Forwarded to the open dialog.
    Dialog(DialogMessage),
    /// Theme picked in the launcher; persisted to settings.
    ThemeSelected(String),
    /// Periodic check of the settings file for a theme change.
    ThemeTick,
}

/// Startup parameters resolved from the command line.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Settings file; the shared default location when `None`.
    pub settings_path: Option<PathBuf>,
    pub addons_path: PathBuf,
    /// Theme override for this session, not persisted.
    pub theme: Option<String>,
    /// Dialog to open right after startup.
    pub open: Option<Tool>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            settings_path: None,
            addons_path: crate::addons::default_addons_path(),
            theme: None,
            open: None,
        }
    }
}

/// Run the launcher window.
pub fn run_launcher(options: LaunchOptions) -> crate::Result<()> {
    // Store in thread-local for the boot function
    INIT_OPTIONS.with(|cell| *cell.borrow_mut() = Some(options));

    iced::application(App::boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size((560.0, 720.0))
        .run()?;

    Ok(())
}
