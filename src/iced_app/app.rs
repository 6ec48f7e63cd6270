//! App struct definition and core initialization.

use std::cell::RefCell;
use std::path::PathBuf;

use iced::Task;

use crate::config::Settings;
use crate::theme::{ThemeManager, ThemeProvider};
use crate::worldtext::GenerateRequest;

use super::dialog::PointWorldTextDialog;
use super::state::Tool;
use super::{LaunchOptions, Message};

// Thread-local storage for init params
thread_local! {
    pub static INIT_OPTIONS: RefCell<Option<LaunchOptions>> = const { RefCell::new(None) };
}

/// Application state.
pub struct App {
    pub(crate) settings: Settings,
    pub(crate) theme_manager: ThemeManager,
    /// CS2 addon content directory listed by the point_worldtext dialog.
    pub(crate) addons_path: PathBuf,
    /// Open tool dialog, drawn as a modal over the launcher.
    pub(crate) dialog: Option<PointWorldTextDialog>,
    /// Last event shown under the launcher buttons.
    pub(crate) status: String,
    /// Most recent request handed to the generator.
    pub(crate) last_request: Option<GenerateRequest>,
}

impl App {
    pub fn boot() -> (Self, Task<Message>) {
        let options = INIT_OPTIONS
            .with(|cell| cell.borrow_mut().take())
            .unwrap_or_default();
        let mut app = Self::new(options.clone());
        if let Some(tool) = options.open {
            app.open_tool(tool);
        }
        (app, Task::none())
    }

    /// Build the launcher from resolved options without touching the GUI.
    pub fn new(options: LaunchOptions) -> Self {
        let settings = match &options.settings_path {
            Some(path) => Settings::load_from(path),
            None => Settings::load(),
        };
        let theme_manager = match &options.theme {
            Some(name) => ThemeManager::fixed(name),
            None => ThemeManager::new(settings.path()),
        };
        tracing::info!(
            settings = %settings.path().display(),
            theme = %theme_manager.name(),
            addons = %options.addons_path.display(),
            "launcher started"
        );

        App {
            settings,
            theme_manager,
            addons_path: options.addons_path,
            dialog: None,
            status: "Ready.".to_string(),
            last_request: None,
        }
    }

    /// Tools to show, filtered by visibility and sorted by the saved order.
    pub fn visible_tools(&self) -> Vec<Tool> {
        let mut tools: Vec<Tool> = Tool::ALL
            .iter()
            .copied()
            .filter(|t| self.settings.is_visible(t.key()))
            .collect();
        tools.sort_by_key(|t| self.settings.order_of(t.key()).unwrap_or(usize::MAX));
        tools
    }

    pub fn dialog(&self) -> Option<&PointWorldTextDialog> {
        self.dialog.as_ref()
    }

    pub fn last_request(&self) -> Option<&GenerateRequest> {
        self.last_request.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn theme_name(&self) -> &str {
        self.theme_manager.name()
    }
}
