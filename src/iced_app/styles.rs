//! UI style functions for iced widgets.
//!
//! Every style takes the active [`Palette`], so switching themes recolors the
//! whole widget tree on the next `view()`.

use iced::widget::{button, container, pick_list, text_input};
use iced::{Background, Border, Color, Theme};

use crate::theme::ThemeColors;

/// Resolved iced colors for the active theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg: Color,
    pub panel: Color,
    pub button: Color,
    pub button_hover: Color,
    pub button_active: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub danger: Color,
}

impl From<ThemeColors> for Palette {
    fn from(c: ThemeColors) -> Self {
        let text: Color = c.text.into();
        Self {
            bg: c.window_bg.into(),
            panel: c.title_bar_bg.into(),
            button: c.button.into(),
            button_hover: c.button_hover.into(),
            button_active: c.button_active.into(),
            border: c.border.into(),
            text,
            text_muted: Color { a: 0.6, ..text },
            accent: c.accent.into(),
            danger: Color::from_rgb(0.91, 0.07, 0.14),
        }
    }
}

/// Build the iced theme so default-styled widgets (radios, checkboxes, the
/// text editor, scrollbars) follow the same colors.
pub fn iced_theme(name: &str, p: &Palette) -> Theme {
    Theme::custom(
        name.to_string(),
        iced::theme::Palette {
            background: p.bg,
            text: p.text,
            primary: p.accent,
            danger: p.danger,
            ..iced::theme::Palette::DARK
        },
    )
}

/// Regular action buttons (tool launchers, Cancel, Browse).
pub fn button_style(p: &Palette, status: button::Status) -> button::Style {
    let (bg, text_color) = match status {
        button::Status::Active => (p.button, p.text),
        button::Status::Hovered => (p.button_hover, p.text),
        button::Status::Pressed => (p.button_active, p.text),
        button::Status::Disabled => (p.panel, p.text_muted),
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color,
        border: Border {
            color: p.border,
            width: 1.0,
            radius: 3.0.into(),
        },
        ..Default::default()
    }
}

/// Primary button (Generate).
pub fn accent_button_style(p: &Palette, status: button::Status) -> button::Style {
    let (bg, border_color) = match status {
        button::Status::Active => (p.accent, p.accent),
        button::Status::Hovered => (Color { a: 0.85, ..p.accent }, p.text),
        button::Status::Pressed => (p.button_active, p.accent),
        button::Status::Disabled => (p.panel, p.border),
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: p.text,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 3.0.into(),
        },
        ..Default::default()
    }
}

pub fn input_style(p: &Palette, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Active => p.border,
        text_input::Status::Hovered => p.button_hover,
        text_input::Status::Focused { is_hovered: _ } => p.accent,
        text_input::Status::Disabled => p.panel,
    };

    text_input::Style {
        background: Background::Color(p.panel),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 3.0.into(),
        },
        icon: p.text_muted,
        placeholder: p.text_muted,
        value: p.text,
        selection: Color { a: 0.4, ..p.accent },
    }
}

/// Style for pick_list dropdowns (size, addon, theme selectors).
pub fn pick_list_style(p: &Palette, status: pick_list::Status) -> pick_list::Style {
    let border_color = match status {
        pick_list::Status::Active => p.border,
        pick_list::Status::Hovered => p.button_hover,
        pick_list::Status::Opened { .. } => p.accent,
    };

    pick_list::Style {
        text_color: p.text,
        placeholder_color: p.text_muted,
        handle_color: p.text_muted,
        background: Background::Color(p.panel),
        border: Border { color: border_color, width: 1.0, radius: 3.0.into() },
    }
}

/// Pick list that cannot be used (addon listing failed or is empty).
pub fn disabled_pick_list_style(p: &Palette, _status: pick_list::Status) -> pick_list::Style {
    pick_list::Style {
        text_color: p.text_muted,
        placeholder_color: p.danger,
        handle_color: p.border,
        background: Background::Color(p.bg),
        border: Border { color: p.border, width: 1.0, radius: 3.0.into() },
    }
}

pub fn window_style(p: &Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(p.bg)),
        text_color: Some(p.text),
        ..Default::default()
    }
}

pub fn panel_style(p: &Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(p.panel)),
        text_color: Some(p.text),
        border: Border { color: p.border, width: 1.0, radius: 4.0.into() },
        ..Default::default()
    }
}

/// Dimmed layer behind a modal.
pub fn backdrop_style() -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.7, ..Color::BLACK })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::theme_colors;

    #[test]
    fn test_palette_follows_theme() {
        let grey = Palette::from(theme_colors("grey").unwrap());
        let white = Palette::from(theme_colors("white").unwrap());
        assert_ne!(grey.bg, white.bg);
        assert_eq!(grey.text, Color::WHITE);
        assert!(white.text.r < 0.5);
        assert!((grey.text_muted.a - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_button_states_use_theme_roles() {
        let p = Palette::from(theme_colors("dracula").unwrap());
        let hovered = button_style(&p, button::Status::Hovered);
        assert_eq!(hovered.background, Some(Background::Color(p.button_hover)));
        let disabled = button_style(&p, button::Status::Disabled);
        assert_eq!(disabled.text_color, p.text_muted);
    }
}
