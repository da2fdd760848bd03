mod confirm_dialog;
mod counter_view;
mod create_dialog;
mod header;
mod history_view;
mod input_box;
mod layout;
mod status_bar;
mod theme;

use crate::app::state::{AppState, Tab};
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme::Theme::BG_DARK)), area);

    let app_layout = layout::compute_layout(area);
    header::render_title(frame, app_layout.header);
    header::render_tabs(frame, app_layout.tabs, state);
    match state.selected_tab {
        Tab::Counter => counter_view::render(frame, app_layout.content, state),
        Tab::History => history_view::render(frame, app_layout.content, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);

    // Popups last so they draw over everything
    create_dialog::render(frame, state);
    confirm_dialog::render(frame, state);
}
