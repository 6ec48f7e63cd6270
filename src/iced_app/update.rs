//! App::update() method and related logic.

use std::io::Write;

use iced::Task;

use crate::theme::ThemeProvider;
use crate::worldtext::GenerateRequest;

use super::app::App;
use super::dialog::{DialogAction, DialogMessage, PointWorldTextDialog};
use super::state::Tool;
use super::Message;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenTool(tool) => self.open_tool(tool),
            Message::Dialog(msg) => return self.handle_dialog_message(msg),
            Message::ThemeSelected(name) => self.handle_theme_selected(&name),
            Message::ThemeTick => self.handle_theme_tick(),
        }

        Task::none()
    }

    // ── Event handlers ──────────────────────────────────────────────────

    pub(crate) fn open_tool(&mut self, tool: Tool) {
        match tool {
            Tool::PointWorldText => {
                self.dialog = Some(PointWorldTextDialog::new(&self.addons_path));
            }
        }
        tracing::debug!(%tool, "opened tool dialog");
        self.status = format!("Opened {}.", tool.label());
    }

    fn handle_dialog_message(&mut self, msg: DialogMessage) -> Task<Message> {
        let Some(dialog) = self.dialog.as_mut() else {
            return Task::none();
        };
        match dialog.update(msg) {
            DialogAction::None => {}
            DialogAction::Run(task) => return task.map(Message::Dialog),
            DialogAction::Submit(request) => {
                self.dialog = None;
                self.hand_off(request);
            }
            DialogAction::Close => {
                self.dialog = None;
                self.status = "Cancelled.".to_string();
            }
        }
        Task::none()
    }

    /// Pass a confirmed request to the generator: one JSON line on stdout.
    fn hand_off(&mut self, request: GenerateRequest) {
        let dir = request.output_dir(&self.addons_path);
        tracing::info!(
            file = %request.image_file_name(),
            material = request.material_file_name().as_deref().unwrap_or("-"),
            size = %request.size(),
            dir = %dir.display(),
            "point_worldtext request"
        );

        match serde_json::to_string(&request) {
            Ok(line) => {
                let mut stdout = std::io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{line}").and_then(|_| stdout.flush()) {
                    tracing::warn!("failed to write request: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to encode request: {e}"),
        }

        let files = match request.material_file_name() {
            Some(material) => format!("{} + {material}", request.image_file_name()),
            None => request.image_file_name(),
        };
        self.status = format!("Queued {files} → {}", dir.display());
        self.last_request = Some(request);
    }

    fn handle_theme_selected(&mut self, name: &str) {
        if let Err(e) = self.settings.set_theme(name) {
            tracing::warn!("could not save theme: {e}");
        }
        if self.theme_manager.select(name) {
            self.status = format!("Theme: {name}");
        }
    }

    fn handle_theme_tick(&mut self) {
        if self.theme_manager.check_for_updates() {
            tracing::info!(theme = %self.theme_manager.name(), "theme changed on disk");
        }
        if self.settings.refresh() {
            tracing::debug!("settings reloaded from {}", self.settings.path().display());
        }
    }
}
