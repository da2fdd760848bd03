use crate::api::error::ApiResult;
use crate::api::model::Faltada;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Poll interval elapsed
    PollTick,

    /// Sync client results
    CountFetched(ApiResult<u64>),
    EventsFetched(ApiResult<Vec<Faltada>>),
    EventCreated(ApiResult<()>),
    HistoryCleared(ApiResult<()>),
}
