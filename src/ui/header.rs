use crate::app::state::{AppState, Tab};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

pub const TITLE: &str = "Faltadas Counter";

pub fn render_title(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(format!(" {} ", TITLE), Theme::header()));
    frame.render_widget(Paragraph::new(line).style(Theme::header()), area);
}

pub fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Theme::key_hint()),
                Span::raw(tab.title()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.selected_tab.index())
        .style(Theme::tab_normal())
        .highlight_style(Theme::tab_selected())
        .divider(Span::styled("│", Theme::border()))
        .padding("  ", "  ");

    frame.render_widget(
        Block::default().borders(Borders::BOTTOM).border_style(Theme::border()),
        area,
    );

    // Centered like a segmented control: "  N Title  " per tab plus dividers
    let width: u16 = Tab::ALL.iter().map(|t| t.title().len() as u16 + 6).sum::<u16>()
        + Tab::ALL.len() as u16
        - 1;
    let width = width.min(area.width);
    let x = area.x + area.width.saturating_sub(width) / 2;
    if area.height >= 2 {
        frame.render_widget(tabs, Rect::new(x, area.y + 1, width, 1));
    }
}
