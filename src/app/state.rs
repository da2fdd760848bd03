use crate::api::error::ApiError;
use crate::api::model::Faltada;
use crate::config::AppConfig;
use chrono::{DateTime, Local};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Counter,
    History,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Counter, Tab::History];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Counter => "Counter",
            Tab::History => "History",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Counter => 0,
            Tab::History => 1,
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Counter => Tab::History,
            Tab::History => Tab::Counter,
        }
    }
}

/// A single-line text buffer with a byte-offset cursor.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        let bytes = self.text.as_bytes();
        let mut pos = self.cursor;
        while pos > 0 && bytes[pos - 1] == b' ' {
            pos -= 1;
        }
        while pos > 0 && bytes[pos - 1] != b' ' {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    /// Terminal columns between the start of the text and the cursor.
    pub fn cursor_width(&self) -> usize {
        self.text[..self.cursor].width()
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.text.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Author,
    Reason,
}

/// The "new faltada" dialog and its two draft buffers.
#[derive(Debug, Default)]
pub struct CreateDialog {
    pub open: bool,
    pub author: InputState,
    pub reason: InputState,
    pub focus: DraftField,
}

impl CreateDialog {
    pub fn show(&mut self) {
        self.open = true;
        self.focus = DraftField::Author;
    }

    /// Close and forget whatever was typed.
    pub fn cancel(&mut self) {
        self.open = false;
        self.author.clear();
        self.reason.clear();
    }

    /// Close and hand back the drafts, leaving both fields empty.
    pub fn submit(&mut self) -> (String, String) {
        self.open = false;
        (self.author.take_text(), self.reason.take_text())
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            DraftField::Author => DraftField::Reason,
            DraftField::Reason => DraftField::Author,
        };
    }

    pub fn focused_input(&mut self) -> &mut InputState {
        match self.focus {
            DraftField::Author => &mut self.author,
            DraftField::Reason => &mut self.reason,
        }
    }
}

/// Outcome of the most recent sync call, shown in the status bar.
#[derive(Debug, Clone)]
pub struct SyncFailure {
    pub operation: &'static str,
    pub message: String,
    pub at: DateTime<Local>,
}

pub struct AppState {
    pub config: AppConfig,
    pub count: u64,
    pub events: Vec<Faltada>,
    pub create_dialog: CreateDialog,
    pub confirm_open: bool,
    pub selected_tab: Tab,
    pub history_scroll: usize,
    pub last_sync: Option<DateTime<Local>>,
    pub last_error: Option<SyncFailure>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            count: 0,
            events: Vec::new(),
            create_dialog: CreateDialog::default(),
            confirm_open: false,
            selected_tab: Tab::Counter,
            history_scroll: 0,
            last_sync: None,
            last_error: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn dialog_open(&self) -> bool {
        self.create_dialog.open || self.confirm_open
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.selected_tab = tab;
        self.dirty = true;
    }

    pub fn set_count(&mut self, count: u64) {
        self.count = count;
        self.mark_synced();
    }

    pub fn set_events(&mut self, events: Vec<Faltada>) {
        self.events = events;
        self.history_scroll = self.history_scroll.min(self.events.len().saturating_sub(1));
        self.mark_synced();
    }

    pub fn record_failure(&mut self, operation: &'static str, error: &ApiError) {
        self.last_error = Some(SyncFailure {
            operation,
            message: error.to_string(),
            at: Local::now(),
        });
        self.dirty = true;
    }

    pub fn scroll_history(&mut self, delta: isize) {
        let max = self.events.len().saturating_sub(1);
        self.history_scroll = self.history_scroll.saturating_add_signed(delta).min(max);
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref failure) = self.last_error {
            return format!(
                "Sync failed ({}) at {}: {}",
                failure.operation,
                failure.at.format(&self.config.ui.time_format),
                failure.message
            );
        }
        match self.last_sync {
            Some(at) => format!("Synced at {}", at.format(&self.config.ui.time_format)),
            None => "Connecting...".to_string(),
        }
    }

    fn mark_synced(&mut self) {
        self.last_sync = Some(Local::now());
        self.last_error = None;
        self.dirty = true;
    }
}
