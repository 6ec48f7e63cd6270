//! The point_worldtext configuration dialog.
//!
//! Collects text, size, output location, filename override and the material
//! flag. Confirming runs validation; a failure shows a modal warning, success
//! yields a single [`GenerateRequest`] for the launcher to hand off.

use std::path::{Path, PathBuf};

use iced::widget::{
    button, checkbox, column, container, pick_list, radio, row, space, text, text_editor,
    text_input,
};
use iced::{Alignment, Element, Length, Task};

use crate::worldtext::{GenerateRequest, OutputMode, TextureSize, WorldTextForm};

use super::state::AddonListing;
use super::styles::{self, Palette};
use super::view::modal;

#[derive(Debug, Clone)]
pub enum DialogMessage {
    TextEdited(text_editor::Action),
    SizeSelected(TextureSize),
    ModeSelected(OutputMode),
    AddonSelected(String),
    PathChanged(String),
    BrowsePressed,
    PathPicked(Option<PathBuf>),
    FilenameChanged(String),
    MaterialToggled(bool),
    Generate,
    Cancel,
    DismissWarning,
}

/// What the owner of the dialog should do after an update.
pub enum DialogAction {
    None,
    Run(Task<DialogMessage>),
    Submit(GenerateRequest),
    Close,
}

pub struct PointWorldTextDialog {
    form: WorldTextForm,
    editor: text_editor::Content,
    addons: AddonListing,
    warning: Option<String>,
}

impl PointWorldTextDialog {
    /// Open the dialog, listing addons under `addons_path`.
    pub fn new(addons_path: &Path) -> Self {
        Self::with_listing(AddonListing::scan(addons_path))
    }

    pub fn with_listing(addons: AddonListing) -> Self {
        Self {
            form: WorldTextForm::default(),
            editor: text_editor::Content::new(),
            addons,
            warning: None,
        }
    }

    pub fn form(&self) -> &WorldTextForm {
        &self.form
    }

    pub fn addons(&self) -> &AddonListing {
        &self.addons
    }

    /// Warning currently shown over the form, if any.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn update(&mut self, message: DialogMessage) -> DialogAction {
        match message {
            DialogMessage::TextEdited(action) => {
                self.editor.perform(action);
                self.form.text = self.editor.text();
            }
            DialogMessage::SizeSelected(size) => self.form.size = size,
            DialogMessage::ModeSelected(mode) => self.form.mode = mode,
            DialogMessage::AddonSelected(name) => {
                if self.addons.contains(&name) {
                    self.form.addon = Some(name);
                }
            }
            DialogMessage::PathChanged(path) => self.form.custom_path = path,
            DialogMessage::BrowsePressed => {
                return DialogAction::Run(Task::perform(pick_folder(), DialogMessage::PathPicked));
            }
            DialogMessage::PathPicked(Some(path)) => {
                self.form.custom_path = path.display().to_string();
            }
            DialogMessage::PathPicked(None) => {}
            DialogMessage::FilenameChanged(name) => self.form.filename_override = name,
            DialogMessage::MaterialToggled(on) => self.form.generate_material = on,
            DialogMessage::Generate => return self.submit(),
            DialogMessage::Cancel => return DialogAction::Close,
            DialogMessage::DismissWarning => self.warning = None,
        }
        DialogAction::None
    }

    fn submit(&mut self) -> DialogAction {
        match self.form.validate() {
            Ok(request) => DialogAction::Submit(request),
            Err(e) => {
                tracing::debug!("point_worldtext validation failed: {e}");
                self.warning = Some(e.to_string());
                DialogAction::None
            }
        }
    }

    pub fn view(&self, palette: Palette) -> Element<'_, DialogMessage> {
        let p = palette;
        let header = text("point_worldtext Generator").size(18).color(p.accent);

        let editor = text_editor(&self.editor)
            .placeholder("Text to render…")
            .on_action(DialogMessage::TextEdited)
            .height(110);

        let size_row = row![
            text("Size:").width(110),
            pick_list(TextureSize::PRESETS, Some(self.form.size), DialogMessage::SizeSelected)
                .style(move |_, s| styles::pick_list_style(&p, s)),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let mode_row = row![
            radio("CS2 addon", OutputMode::Addon, Some(self.form.mode), DialogMessage::ModeSelected),
            radio(
                "Custom folder",
                OutputMode::CustomPath,
                Some(self.form.mode),
                DialogMessage::ModeSelected,
            ),
        ]
        .spacing(16);

        let target_row = if self.form.shows_addon_selector() {
            self.addon_row(p)
        } else {
            self.path_row(p)
        };

        let filename_row = row![
            text("Filename:").width(110),
            text_input("derived from text", &self.form.filename_override)
                .on_input(DialogMessage::FilenameChanged)
                .style(move |_, s| styles::input_style(&p, s)),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let preview = text(format!("Output: {}", self.form.filename_preview()))
            .size(12)
            .color(p.text_muted);

        let material = checkbox(self.form.generate_material)
            .label("Generate companion material (.vmat)")
            .on_toggle(DialogMessage::MaterialToggled);

        let buttons = row![
            space::horizontal(),
            button(text("Cancel"))
                .on_press(DialogMessage::Cancel)
                .padding([6, 16])
                .style(move |_, s| styles::button_style(&p, s)),
            button(text("Generate"))
                .on_press(DialogMessage::Generate)
                .padding([6, 16])
                .style(move |_, s| styles::accent_button_style(&p, s)),
        ]
        .spacing(8);

        let form = container(
            column![
                header,
                text("Text").size(12).color(p.text_muted),
                editor,
                size_row,
                text("Output location").size(12).color(p.text_muted),
                mode_row,
                target_row,
                filename_row,
                preview,
                material,
                buttons,
            ]
            .spacing(10)
            .padding(16),
        )
        .width(520)
        .style(move |_| styles::panel_style(&p));

        match &self.warning {
            Some(message) => modal(form, warning_box(message, p), DialogMessage::DismissWarning),
            None => form.into(),
        }
    }

    /// Addon selector, or a disabled entry naming why none can be chosen.
    fn addon_row(&self, p: Palette) -> Element<'_, DialogMessage> {
        let names: &[String] = match &self.addons {
            AddonListing::Loaded(names) => names,
            AddonListing::Failed(_) => &[],
        };
        let selector = match self.addons.unavailable_label() {
            Some(label) => pick_list(names, None::<String>, DialogMessage::AddonSelected)
                .placeholder(label)
                .width(Length::Fill)
                .style(move |_, s| styles::disabled_pick_list_style(&p, s)),
            None => pick_list(names, self.form.addon.clone(), DialogMessage::AddonSelected)
                .placeholder("Select addon…")
                .width(Length::Fill)
                .style(move |_, s| styles::pick_list_style(&p, s)),
        };

        row![text("Addon:").width(110), selector]
            .spacing(8)
            .align_y(Alignment::Center)
            .into()
    }

    fn path_row(&self, p: Palette) -> Element<'_, DialogMessage> {
        row![
            text("Folder:").width(110),
            text_input("C:\\path\\to\\output", &self.form.custom_path)
                .on_input(DialogMessage::PathChanged)
                .style(move |_, s| styles::input_style(&p, s)),
            button(text("Browse…"))
                .on_press(DialogMessage::BrowsePressed)
                .style(move |_, s| styles::button_style(&p, s)),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    }
}

fn warning_box<'a>(message: &str, p: Palette) -> Element<'a, DialogMessage> {
    container(
        column![
            text("Warning").size(16).color(p.accent),
            text(message.to_string()),
            row![
                space::horizontal(),
                button(text("OK"))
                    .on_press(DialogMessage::DismissWarning)
                    .padding([4, 20])
                    .style(move |_, s| styles::button_style(&p, s)),
            ],
        ]
        .spacing(12)
        .padding(16),
    )
    .width(320)
    .style(move |_| styles::panel_style(&p))
    .into()
}

async fn pick_folder() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Select output folder")
        .pick_folder()
        .await
        .map(|handle| handle.path().to_path_buf())
}
