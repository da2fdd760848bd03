//! Fire-and-report wrapper around a [`FaltadasBackend`].
//!
//! Every call runs on its own task and reports its outcome to the main loop
//! as an [`AppEvent`]. Failures are logged here and passed on as `Err`; the
//! reducer decides what the screen does with them.

use crate::api::client::FaltadasBackend;
use crate::api::error::ApiResult;
use crate::app::event::AppEvent;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct SyncClient {
    backend: Arc<dyn FaltadasBackend>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl SyncClient {
    pub fn new(backend: Arc<dyn FaltadasBackend>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { backend, event_tx }
    }

    pub fn fetch_count(&self) {
        let backend = self.backend.clone();
        self.spawn("fetch count", async move { backend.fetch_count().await }, AppEvent::CountFetched);
    }

    pub fn fetch_events(&self) {
        let backend = self.backend.clone();
        self.spawn("fetch faltadas", async move { backend.fetch_events().await }, AppEvent::EventsFetched);
    }

    /// Empty strings are sent as-is.
    pub fn create_event(&self, author: String, reason: String) {
        let backend = self.backend.clone();
        self.spawn(
            "create faltada",
            async move { backend.create_event(author, reason).await },
            AppEvent::EventCreated,
        );
    }

    pub fn clear_history(&self) {
        let backend = self.backend.clone();
        self.spawn("clear history", async move { backend.clear_history().await }, AppEvent::HistoryCleared);
    }

    fn spawn<T, F>(&self, what: &'static str, call: F, wrap: fn(ApiResult<T>) -> AppEvent)
    where
        T: Send + 'static,
        F: Future<Output = ApiResult<T>> + Send + 'static,
    {
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = call.await;
            match &result {
                Ok(_) => tracing::debug!("{} succeeded", what),
                Err(e) => tracing::error!("Error during {}: {}", what, e),
            }
            // Receiver is gone once the app has quit.
            let _ = tx.send(wrap(result));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::api::model::Faltada;
    use crate::app::action::Action;
    use crate::app::handler::handle_event;
    use crate::app::state::{AppState, Tab};
    use crate::config::AppConfig;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        GetCount,
        GetList,
        Post { author: String, motivo: String },
        Delete,
    }

    /// Records every call and answers from canned data.
    #[derive(Default)]
    pub struct FakeBackend {
        pub calls: Mutex<Vec<Call>>,
        pub count: Mutex<u64>,
        pub events: Mutex<Vec<Faltada>>,
        pub fail: Mutex<bool>,
    }

    impl FakeBackend {
        fn record(&self, call: Call) -> ApiResult<()> {
            self.calls.lock().unwrap().push(call);
            if *self.fail.lock().unwrap() {
                Err(ApiError::Transport("connection refused".into()))
            } else {
                Ok(())
            }
        }

        pub fn take_calls(&self) -> Vec<Call> {
            std::mem::take(&mut *self.calls.lock().unwrap())
        }
    }

    #[async_trait]
    impl FaltadasBackend for FakeBackend {
        async fn fetch_count(&self) -> ApiResult<u64> {
            self.record(Call::GetCount)?;
            Ok(*self.count.lock().unwrap())
        }

        async fn fetch_events(&self) -> ApiResult<Vec<Faltada>> {
            self.record(Call::GetList)?;
            Ok(self.events.lock().unwrap().clone())
        }

        async fn create_event(&self, author: String, reason: String) -> ApiResult<()> {
            self.record(Call::Post { author: author.clone(), motivo: reason.clone() })?;
            let mut events = self.events.lock().unwrap();
            let id = events.len() as i64 + 1;
            events.insert(
                0,
                Faltada {
                    id,
                    author,
                    reason,
                    created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                },
            );
            *self.count.lock().unwrap() = 0;
            Ok(())
        }

        async fn clear_history(&self) -> ApiResult<()> {
            self.record(Call::Delete)?;
            self.events.lock().unwrap().clear();
            Ok(())
        }
    }

    struct Harness {
        backend: Arc<FakeBackend>,
        sync: SyncClient,
        rx: mpsc::UnboundedReceiver<AppEvent>,
        state: AppState,
    }

    impl Harness {
        fn new() -> Self {
            let backend = Arc::new(FakeBackend::default());
            let (tx, rx) = mpsc::unbounded_channel();
            let sync = SyncClient::new(backend.clone(), tx);
            Self {
                backend,
                sync,
                rx,
                state: AppState::new(AppConfig::default()),
            }
        }

        fn dispatch(&self, actions: Vec<Action>) -> usize {
            let mut spawned = 0;
            for action in actions {
                match action {
                    Action::FetchCount => self.sync.fetch_count(),
                    Action::FetchEvents => self.sync.fetch_events(),
                    Action::CreateEvent { author, reason } => self.sync.create_event(author, reason),
                    Action::ClearHistory => self.sync.clear_history(),
                    Action::Quit => continue,
                }
                spawned += 1;
            }
            spawned
        }

        /// Feed actions through the sync client and the reducer until no
        /// request is left in flight.
        async fn run(&mut self, actions: Vec<Action>) {
            let mut in_flight = self.dispatch(actions);
            while in_flight > 0 {
                let event = self.rx.recv().await.unwrap();
                in_flight -= 1;
                let next = handle_event(&mut self.state, event);
                in_flight += self.dispatch(next);
            }
        }
    }

    fn sorted(mut calls: Vec<Call>) -> Vec<Call> {
        calls.sort_by_key(|c| format!("{:?}", c));
        calls
    }

    #[tokio::test]
    async fn test_create_posts_then_refreshes() {
        let mut h = Harness::new();
        *h.backend.count.lock().unwrap() = 4;
        h.run(vec![Action::CreateEvent {
            author: "Alice".into(),
            reason: "Missed".into(),
        }])
        .await;

        let calls = h.backend.take_calls();
        assert_eq!(
            calls[0],
            Call::Post { author: "Alice".into(), motivo: "Missed".into() }
        );
        assert_eq!(sorted(calls[1..].to_vec()), vec![Call::GetCount, Call::GetList]);
        assert_eq!(h.state.count, 0);
        assert_eq!(h.state.events.len(), 1);
        assert_eq!(h.state.events[0].reason, "Missed");
    }

    #[tokio::test]
    async fn test_clear_deletes_then_refreshes() {
        let mut h = Harness::new();
        h.run(vec![Action::CreateEvent { author: "A".into(), reason: "B".into() }]).await;
        h.backend.take_calls();

        h.run(vec![Action::ClearHistory]).await;
        let calls = h.backend.take_calls();
        assert_eq!(calls[0], Call::Delete);
        assert_eq!(sorted(calls[1..].to_vec()), vec![Call::GetCount, Call::GetList]);
        assert!(h.state.events.is_empty());
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_count() {
        let mut h = Harness::new();
        *h.backend.count.lock().unwrap() = 9;
        h.run(vec![Action::FetchCount]).await;
        assert_eq!(h.state.count, 9);

        *h.backend.fail.lock().unwrap() = true;
        *h.backend.count.lock().unwrap() = 1;
        h.run(vec![Action::FetchCount, Action::FetchEvents]).await;
        assert_eq!(h.state.count, 9);
        assert!(h.state.last_error.is_some());
    }

    #[tokio::test]
    async fn test_failed_create_does_not_refresh() {
        let mut h = Harness::new();
        *h.backend.fail.lock().unwrap() = true;
        h.run(vec![Action::CreateEvent { author: "".into(), reason: "".into() }]).await;
        assert_eq!(
            h.backend.take_calls(),
            vec![Call::Post { author: "".into(), motivo: "".into() }]
        );
        assert_eq!(h.state.selected_tab, Tab::Counter);
    }
}
