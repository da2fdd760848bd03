use crate::app::state::InputState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Draw one bordered text field. The focused field gets the accent border,
/// a prompt chevron, and the terminal cursor.
pub fn render(frame: &mut Frame, area: Rect, label: &str, input: &InputState, focused: bool) {
    let (border_style, title_style) = if focused {
        (Theme::border_focused(), Theme::title())
    } else {
        (Theme::border(), Theme::secondary_text())
    };

    let block = Block::default()
        .title(format!(" {} ", label))
        .title_style(title_style)
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if focused {
        let line = Line::from(vec![
            Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
            Span::styled(input.text.as_str(), Theme::primary_text()),
        ]);
        // Keep the cursor in view on long input
        let prompt_offset = 2usize;
        let cursor_col = prompt_offset + input.cursor_width();
        let scroll = cursor_col.saturating_sub(inner.width.saturating_sub(1) as usize);
        frame.render_widget(Paragraph::new(line).scroll((0, scroll as u16)), inner);

        let cursor_x = inner.x + (cursor_col - scroll) as u16;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    } else {
        let paragraph = Paragraph::new(input.text.as_str()).style(Theme::secondary_text());
        frame.render_widget(paragraph, inner);
    }
}
