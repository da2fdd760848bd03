use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(22, 24, 30);
    pub const BG_SURFACE: Color = Color::Rgb(30, 33, 41);
    pub const BG_ELEVATED: Color = Color::Rgb(40, 44, 54);
    pub const BORDER_DIM: Color = Color::Rgb(70, 76, 90);
    pub const TEXT_PRIMARY: Color = Color::Rgb(225, 228, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 166, 180);
    pub const TEXT_MUTED: Color = Color::Rgb(105, 110, 125);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);
    pub const ACCENT_RED: Color = Color::Rgb(235, 100, 100);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_selected() -> Style {
        Style::default().fg(Self::ACCENT_TEAL).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn tab_normal() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn counter() -> Style {
        Style::default().fg(Self::ACCENT_TEAL).add_modifier(Modifier::BOLD)
    }

    pub fn primary_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn secondary_text() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn muted_text() -> Style {
        Style::default().fg(Self::TEXT_MUTED).add_modifier(Modifier::ITALIC)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Self::ACCENT_AMBER).add_modifier(Modifier::BOLD)
    }

    pub fn danger() -> Style {
        Style::default().fg(Self::ACCENT_RED).add_modifier(Modifier::BOLD)
    }

    pub fn selected_item() -> Style {
        Style::default().bg(Self::BG_ELEVATED)
    }

    pub fn popup() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn status_ok() -> Style {
        Style::default().fg(Self::ACCENT_GREEN).bg(Self::BG_ELEVATED)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Self::ACCENT_RED).bg(Self::BG_ELEVATED)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }
}
