use crate::api::model::Faltada;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
    ScrollbarState,
};

/// Join the lines of a multi-line field so it fits one list row.
pub fn single_line(text: &str) -> String {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).collect::<Vec<_>>().join(" ")
}

/// `By: {author} - {date}` with the date in local time.
pub fn byline(faltada: &Faltada, date_format: &str) -> String {
    format!(
        "By: {} - {}",
        single_line(&faltada.author),
        faltada.created_at.with_timezone(&Local).format(date_format)
    )
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let toolbar = Line::from(vec![
        Span::styled(format!(" {} recorded ", state.events.len()), Theme::secondary_text()),
        Span::raw("  "),
        Span::styled("c", Theme::key_hint()),
        Span::styled(" Clear history ", Theme::danger()),
    ])
    .alignment(Alignment::Right);
    frame.render_widget(Paragraph::new(toolbar), chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let list_area = chunks[1];

    if state.events.is_empty() {
        let empty = Paragraph::new(Line::styled("No faltadas recorded", Theme::muted_text()))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, list_area);
        return;
    }

    let date_format = &state.config.ui.date_format;
    let items: Vec<ListItem> = state
        .events
        .iter()
        .map(|f| {
            ListItem::new(vec![
                Line::styled(format!(" {}", single_line(&f.reason)), Theme::primary_text()),
                Line::styled(format!(" {}", byline(f, date_format)), Theme::secondary_text()),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::selected_item())
        .highlight_symbol("▌");
    let mut list_state = ListState::default().with_selected(Some(state.history_scroll));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    // Three rows per item inside the border
    let visible = (list_area.height.saturating_sub(2) / 3) as usize;
    if state.events.len() > visible {
        let mut scrollbar_state = ScrollbarState::new(state.events.len())
            .position(state.history_scroll);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .thumb_style(Theme::scrollbar_thumb())
                .track_style(Theme::scrollbar_track()),
            list_area.inner(Margin { vertical: 1, horizontal: 0 }),
            &mut scrollbar_state,
        );
    }
}
