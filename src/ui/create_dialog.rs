use crate::app::state::{AppState, DraftField};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use crate::ui::input_box;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    let dialog = &state.create_dialog;
    if !dialog.open {
        return;
    }

    let popup = centered(frame.area(), 60, 11);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" New Faltada ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Theme::popup());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Author
            Constraint::Length(3), // Reason
            Constraint::Min(0),
            Constraint::Length(1), // Key help
        ])
        .split(inner);

    input_box::render(frame, chunks[0], "Author", &dialog.author, dialog.focus == DraftField::Author);
    input_box::render(frame, chunks[1], "Reason", &dialog.reason, dialog.focus == DraftField::Reason);

    let help = Line::from(vec![
        Span::styled(" Enter", Theme::key_hint()),
        Span::styled(" Save  ", Theme::secondary_text()),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" Cancel  ", Theme::secondary_text()),
        Span::styled("Tab", Theme::key_hint()),
        Span::styled(" Next field", Theme::secondary_text()),
    ]);
    frame.render_widget(Paragraph::new(help), chunks[3]);
}
