use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

fn key_hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
    if state.dialog_open() {
        return &[];
    }
    match state.selected_tab {
        Tab::Counter => &[("Tab", "switch"), ("Enter", "new"), ("r", "refresh"), ("q", "quit")],
        Tab::History => &[
            ("Tab", "switch"),
            ("↑↓", "scroll"),
            ("n", "new"),
            ("c", "clear"),
            ("r", "refresh"),
            ("q", "quit"),
        ],
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    for (key, what) in key_hints(state) {
        parts.push(Span::styled(format!(" {}", key), Theme::key_hint().bg(Theme::BG_ELEVATED)));
        parts.push(Span::styled(format!(" {} ", what), Theme::status_bar()));
    }

    let status = format!(" {} ", state.status_line());
    let status_style = if state.last_error.is_some() {
        Theme::status_error()
    } else {
        Theme::status_ok()
    };

    // Sync status wins over key hints on narrow terminals
    let mut used: usize = parts.iter().map(|s| s.content.width()).sum();
    if used + status.width() > area.width as usize {
        parts.clear();
        used = 0;
    }
    // Pad so the sync status sits at the right edge
    let remaining = (area.width as usize).saturating_sub(used + status.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(status, status_style));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
