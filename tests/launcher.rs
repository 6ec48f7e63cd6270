//! Tests for the launcher: tool visibility, dialog lifecycle, theme switching.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use cs2_mapping_tools::iced_app::{App, DialogMessage, Message, Tool};
use cs2_mapping_tools::LaunchOptions;
use iced::widget::text_editor::{Action, Edit};
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("addons").join("kz_lego")).unwrap();
        Self { dir }
    }

    fn settings_path(&self) -> std::path::PathBuf {
        self.dir.path().join("settings.json")
    }

    fn addons_path(&self) -> std::path::PathBuf {
        self.dir.path().join("addons")
    }

    fn app(&self) -> App {
        App::new(LaunchOptions {
            settings_path: Some(self.settings_path()),
            addons_path: self.addons_path(),
            theme: None,
            open: None,
        })
    }
}

fn send(app: &mut App, msg: DialogMessage) {
    let _ = app.update(Message::Dialog(msg));
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn read_theme(path: &Path) -> String {
    read_json(path)["appearance_mode"].as_str().unwrap().to_string()
}

/// Rewrite the settings file as another tool would, with a later mtime.
fn write_externally(path: &Path, contents: &str) {
    std::fs::write(path, contents).unwrap();
    let later = SystemTime::now() + Duration::from_secs(5);
    std::fs::File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(later)
        .unwrap();
}

#[test]
fn test_point_worldtext_visible_by_default() {
    let fx = Fixture::new();
    assert_eq!(fx.app().visible_tools(), vec![Tool::PointWorldText]);
}

#[test]
fn test_hidden_tool_not_listed() {
    let fx = Fixture::new();
    std::fs::write(fx.settings_path(), r#"{"visible_buttons": {"point_worldtext": false}}"#)
        .unwrap();
    assert!(fx.app().visible_tools().is_empty());
}

#[test]
fn test_open_and_cancel_dialog() {
    let fx = Fixture::new();
    let mut app = fx.app();
    assert!(app.dialog().is_none());

    let _ = app.update(Message::OpenTool(Tool::PointWorldText));
    let dialog = app.dialog().expect("dialog should be open");
    assert!(dialog.addons().contains("kz_lego"));

    send(&mut app, DialogMessage::Cancel);
    assert!(app.dialog().is_none());
    assert_eq!(app.status(), "Cancelled.");
    assert!(app.last_request().is_none());
}

#[test]
fn test_submit_hands_off_request() {
    let fx = Fixture::new();
    let mut app = fx.app();
    let _ = app.update(Message::OpenTool(Tool::PointWorldText));

    send(
        &mut app,
        DialogMessage::TextEdited(Action::Edit(Edit::Paste(Arc::new("Checkpoint 3".into())))),
    );
    send(&mut app, DialogMessage::AddonSelected("kz_lego".into()));
    send(&mut app, DialogMessage::Generate);

    assert!(app.dialog().is_none());
    let request = app.last_request().expect("request should be emitted");
    assert_eq!(request.addon_name.as_deref(), Some("kz_lego"));
    assert_eq!(request.filename, "Checkpoint_3");
    assert!(app.status().contains("Checkpoint_3.png + Checkpoint_3.vmat"));
}

#[test]
fn test_invalid_submit_keeps_dialog_open() {
    let fx = Fixture::new();
    let mut app = fx.app();
    let _ = app.update(Message::OpenTool(Tool::PointWorldText));
    send(&mut app, DialogMessage::Generate);

    let dialog = app.dialog().expect("dialog should stay open");
    assert!(dialog.warning().is_some());
    assert!(app.last_request().is_none());
}

#[test]
fn test_theme_selection_is_persisted() {
    let fx = Fixture::new();
    let mut app = fx.app();
    assert_eq!(app.theme_name(), "grey");

    let _ = app.update(Message::ThemeSelected("dracula".into()));
    assert_eq!(app.theme_name(), "dracula");
    assert_eq!(read_theme(&fx.settings_path()), "dracula");

    let _ = app.update(Message::ThemeTick);
    assert_eq!(app.theme_name(), "dracula");
}

#[test]
fn test_theme_override_from_cli() {
    let fx = Fixture::new();
    std::fs::write(fx.settings_path(), r#"{"appearance_mode": "red"}"#).unwrap();
    let app = App::new(LaunchOptions {
        settings_path: Some(fx.settings_path()),
        addons_path: fx.addons_path(),
        theme: Some("white".into()),
        open: None,
    });
    assert_eq!(app.theme_name(), "white");
}

#[test]
fn test_external_theme_change_applies_on_tick() {
    let fx = Fixture::new();
    let mut app = fx.app();
    assert_eq!(app.theme_name(), "grey");

    write_externally(
        &fx.settings_path(),
        r#"{"appearance_mode": "dracula", "visible_buttons": {"point_worldtext": false}}"#,
    );
    let _ = app.update(Message::ThemeTick);

    assert_eq!(app.theme_name(), "dracula");
    assert!(app.visible_tools().is_empty());
}

#[test]
fn test_theme_change_keeps_keys_from_other_tools() {
    let fx = Fixture::new();
    std::fs::write(fx.settings_path(), r#"{"appearance_mode": "red"}"#).unwrap();
    let mut app = App::new(LaunchOptions {
        settings_path: Some(fx.settings_path()),
        addons_path: fx.addons_path(),
        theme: Some("white".into()),
        open: None,
    });

    write_externally(
        &fx.settings_path(),
        r#"{"appearance_mode": "red", "compact_mode": true,
            "source2viewer_path": "C:/S2V.exe",
            "visible_buttons": {"point_worldtext": false}}"#,
    );
    let _ = app.update(Message::ThemeTick);
    assert_eq!(app.theme_name(), "white");
    assert!(app.visible_tools().is_empty());

    let _ = app.update(Message::ThemeSelected("blue".into()));
    let raw = read_json(&fx.settings_path());
    assert_eq!(raw["appearance_mode"], "blue");
    assert_eq!(raw["compact_mode"], true);
    assert_eq!(raw["source2viewer_path"], "C:/S2V.exe");
    assert_eq!(app.theme_name(), "blue");
}
