/// Side effects requested by the reducer and carried out by the main loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchCount,
    FetchEvents,
    CreateEvent { author: String, reason: String },
    ClearHistory,
    Quit,
}
