use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE: isize = 5;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::PollTick => vec![Action::FetchCount],
        AppEvent::CountFetched(result) => {
            match result {
                Ok(count) => state.set_count(count),
                Err(e) => state.record_failure("fetch count", &e),
            }
            vec![]
        }
        AppEvent::EventsFetched(result) => {
            match result {
                Ok(events) => state.set_events(events),
                Err(e) => state.record_failure("fetch history", &e),
            }
            vec![]
        }
        AppEvent::EventCreated(result) => match result {
            Ok(()) => refresh(),
            Err(e) => {
                state.record_failure("create faltada", &e);
                vec![]
            }
        },
        AppEvent::HistoryCleared(result) => match result {
            Ok(()) => refresh(),
            Err(e) => {
                state.record_failure("clear history", &e);
                vec![]
            }
        },
    }
}

/// The read pair issued on mount and after every successful mutation.
pub fn refresh() -> Vec<Action> {
    vec![Action::FetchCount, Action::FetchEvents]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Dialogs capture all input while open
    if state.create_dialog.open {
        return handle_create_dialog_key(state, key);
    }
    if state.confirm_open {
        return handle_confirm_dialog_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Char('r') => return refresh(),
        KeyCode::Char('n') => {
            state.create_dialog.show();
            return vec![];
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            state.select_tab(state.selected_tab.next());
            return vec![];
        }
        KeyCode::Char('1') => {
            state.select_tab(Tab::Counter);
            return vec![];
        }
        KeyCode::Char('2') => {
            state.select_tab(Tab::History);
            return vec![];
        }
        _ => {}
    }

    match state.selected_tab {
        Tab::Counter => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                state.create_dialog.show();
            }
        }
        Tab::History => match key.code {
            KeyCode::Char('c') | KeyCode::Delete => state.confirm_open = true,
            KeyCode::Up | KeyCode::Char('k') => state.scroll_history(-1),
            KeyCode::Down | KeyCode::Char('j') => state.scroll_history(1),
            KeyCode::PageUp => state.scroll_history(-PAGE),
            KeyCode::PageDown => state.scroll_history(PAGE),
            KeyCode::Home => state.history_scroll = 0,
            KeyCode::End => state.scroll_history(isize::MAX),
            _ => {}
        },
    }
    vec![]
}

fn handle_create_dialog_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let dialog = &mut state.create_dialog;
    match key.code {
        KeyCode::Esc => dialog.cancel(),
        KeyCode::Enter => {
            // Closing does not wait for the request
            let (author, reason) = dialog.submit();
            return vec![Action::CreateEvent { author, reason }];
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => dialog.toggle_focus(),
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            dialog.focused_input().delete_word_back()
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            dialog.focused_input().insert_char(c)
        }
        KeyCode::Backspace => dialog.focused_input().delete_back(),
        KeyCode::Delete => dialog.focused_input().delete_forward(),
        KeyCode::Left => dialog.focused_input().move_left(),
        KeyCode::Right => dialog.focused_input().move_right(),
        KeyCode::Home => dialog.focused_input().move_home(),
        KeyCode::End => dialog.focused_input().move_end(),
        _ => {}
    }
    vec![]
}

fn handle_confirm_dialog_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            state.confirm_open = false;
            vec![Action::ClearHistory]
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            state.confirm_open = false;
            vec![]
        }
        _ => vec![],
    }
}
