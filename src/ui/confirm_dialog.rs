use crate::app::state::AppState;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub const WARNING: &str =
    "Are you sure you want to clear the whole history? This action cannot be undone.";

pub fn render(frame: &mut Frame, state: &AppState) {
    if !state.confirm_open {
        return;
    }

    let popup = centered(frame.area(), 50, 8);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Confirm action ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_RED))
        .style(Theme::popup());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let text = vec![
        Line::styled(WARNING, Theme::primary_text()),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Theme::key_hint()),
            Span::styled(" Clear history  ", Theme::danger()),
            Span::styled("n", Theme::key_hint()),
            Span::styled(" Cancel", Theme::secondary_text()),
        ]),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner.inner(Margin { vertical: 0, horizontal: 1 }));
}
