use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const DIGITS: [[&str; 5]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    [" █ ", "██ ", " █ ", " █ ", "███"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

/// Render `n` in a five-row block font.
pub fn big_number(n: u64) -> [String; 5] {
    let digits: Vec<usize> = n
        .to_string()
        .bytes()
        .map(|b| (b - b'0') as usize)
        .collect();
    std::array::from_fn(|row| {
        digits
            .iter()
            .map(|&d| DIGITS[d][row])
            .collect::<Vec<_>>()
            .join(" ")
    })
}

pub fn caption(count: u64) -> String {
    if count == 1 {
        "1 day without faltadas".to_string()
    } else {
        format!("{} days without faltadas", count)
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();
    let big = big_number(state.count);
    let fits = big[0].chars().count() as u16 <= area.width && area.height >= 14;
    if fits {
        lines.extend(big.into_iter().map(|row| Line::styled(row, Theme::counter())));
    } else {
        lines.push(Line::styled(state.count.to_string(), Theme::counter()));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(caption(state.count), Theme::secondary_text()));

    let text_h = lines.len() as u16;
    let button_h = 5u16;
    let total_h = text_h + 1 + button_h;
    let top = area.y + area.height.saturating_sub(total_h) / 2;

    let text_area = Rect::new(area.x, top, area.width, text_h.min(area.height));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);

    let below = Rect::new(
        area.x,
        top + text_h + 1,
        area.width,
        area.bottom().saturating_sub(top + text_h + 1),
    );
    if below.height < 3 {
        return;
    }
    render_button(frame, below);
}

/// The big round "FALTADA" control.
fn render_button(frame: &mut Frame, area: Rect) {
    let width = 22u16.min(area.width);
    let button_area = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y,
        width,
        area.height.min(5),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .style(Style::default().bg(Theme::BG_ELEVATED));
    let inner = block.inner(button_area);
    frame.render_widget(block, button_area);

    let label = vec![
        Line::styled("FALTADA", Theme::counter()),
        Line::from(vec![
            Span::styled("Enter", Theme::key_hint()),
            Span::styled(" / ", Theme::secondary_text()),
            Span::styled("n", Theme::key_hint()),
        ]),
    ];
    let top_pad = inner.height.saturating_sub(2) / 2;
    let label_area = Rect::new(inner.x, inner.y + top_pad, inner.width, inner.height - top_pad);
    frame.render_widget(Paragraph::new(label).alignment(Alignment::Center), label_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_number() {
        let rows = big_number(10);
        assert_eq!(rows[0], " █  ███");
        assert_eq!(rows[4], "███ ███");
        assert_eq!(big_number(7)[1], "  █");
    }

    #[test]
    fn test_caption() {
        assert_eq!(caption(0), "0 days without faltadas");
        assert_eq!(caption(1), "1 day without faltadas");
        assert_eq!(caption(15), "15 days without faltadas");
    }
}
