//! App::view() and subscription methods plus UI building helpers.

use iced::widget::{
    button, center, column, container, mouse_area, opaque, pick_list, row, space, stack, text,
    Column,
};
use iced::{Alignment, Element, Length, Subscription, Theme};

use crate::theme::{theme_names, ThemeProvider};

use super::app::App;
use super::styles::{self, Palette};
use super::Message;

/// How often the settings file is checked for a theme change.
const THEME_POLL: std::time::Duration = std::time::Duration::from_secs(1);

/// Lay `content` over `base` on a dimmed backdrop. Clicking the backdrop
/// publishes `on_blur`.
pub(super) fn modal<'a, M>(
    base: impl Into<Element<'a, M>>,
    content: impl Into<Element<'a, M>>,
    on_blur: M,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_| styles::backdrop_style()))
                .on_press(on_blur)
        ),
    ]
    .into()
}

impl App {
    pub fn title(_state: &Self) -> String {
        "CS2KZ Mapping Tools".to_string()
    }

    pub fn palette(&self) -> Palette {
        Palette::from(self.theme_manager.colors())
    }

    pub fn theme(&self) -> Theme {
        styles::iced_theme(self.theme_manager.name(), &self.palette())
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::time::every(THEME_POLL).map(|_| Message::ThemeTick)
    }

    /// Build the title bar.
    fn build_title_bar(&self, p: Palette) -> Element<'_, Message> {
        container(text("CS2KZ Mapping Tools").size(20).color(p.accent))
            .width(Length::Fill)
            .padding([8, 12])
            .style(move |_| styles::panel_style(&p))
            .into()
    }

    /// One button per visible tool, in the user's order.
    fn build_tool_buttons(&self, p: Palette) -> Column<'_, Message> {
        let tools = self.visible_tools();
        if tools.is_empty() {
            return column![
                text("All tools are hidden. Enable them in settings.json.").color(p.text_muted)
            ];
        }

        let mut col = Column::new().spacing(6);
        for tool in tools {
            col = col.push(
                button(text(tool.label()))
                    .on_press(Message::OpenTool(tool))
                    .width(Length::Fill)
                    .padding([8, 12])
                    .style(move |_, s| styles::button_style(&p, s)),
            );
        }
        col
    }

    /// Theme selector row.
    fn build_theme_row(&self, p: Palette) -> Element<'_, Message> {
        row![
            text("Theme:"),
            space::horizontal(),
            pick_list(
                theme_names(),
                Some(self.theme_manager.name().to_string()),
                Message::ThemeSelected,
            )
            .style(move |_, s| styles::pick_list_style(&p, s)),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    }

    fn build_status_line(&self, p: Palette) -> Element<'_, Message> {
        text(&self.status).size(12).color(p.text_muted).into()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let p = self.palette();

        let launcher = container(
            column![
                self.build_title_bar(p),
                self.build_tool_buttons(p),
                space::vertical(),
                self.build_theme_row(p),
                self.build_status_line(p),
            ]
            .spacing(10)
            .padding(12),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| styles::window_style(&p));

        match &self.dialog {
            Some(dialog) => modal(
                launcher,
                dialog.view(p).map(Message::Dialog),
                Message::Dialog(super::dialog::DialogMessage::Cancel),
            ),
            None => launcher.into(),
        }
    }
}
