//! Periodic count refresh.
//!
//! [`start_polling`] spawns a task that emits [`AppEvent::PollTick`] once per
//! interval. The task lives exactly as long as the returned [`PollerHandle`].

use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop polling. Ticks already queued on the channel are still delivered.
    pub fn cancel(self) {
        self.task.abort();
        tracing::info!("Poller cancelled");
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// The first tick fires one full interval after start; the caller issues the
/// initial fetch itself.
pub fn start_polling(event_tx: mpsc::UnboundedSender<AppEvent>, period: Duration) -> PollerHandle {
    let task = tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if event_tx.send(AppEvent::PollTick).is_err() {
                tracing::debug!("Event channel closed, poller exiting");
                break;
            }
        }
    });
    tracing::info!("Polling count every {}s", period.as_secs());
    PollerHandle { task }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(60);

    fn drain(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> usize {
        let mut n = 0;
        while let Ok(event) = rx.try_recv() {
            assert!(matches!(event, AppEvent::PollTick));
            n += 1;
        }
        n
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _poller = start_polling(tx, PERIOD);

        time::sleep(PERIOD - Duration::from_secs(1)).await;
        assert_eq!(drain(&mut rx), 0);

        time::sleep(Duration::from_secs(2)).await;
        assert_eq!(drain(&mut rx), 1);

        time::sleep(PERIOD * 3).await;
        assert_eq!(drain(&mut rx), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let poller = start_polling(tx, PERIOD);
        time::sleep(PERIOD + Duration::from_secs(1)).await;
        assert_eq!(drain(&mut rx), 1);

        poller.cancel();
        time::sleep(PERIOD * 5).await;
        assert_eq!(drain(&mut rx), 0);
        // Sender went away with the aborted task
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_exits_when_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let poller = start_polling(tx, PERIOD);
        drop(rx);
        time::sleep(PERIOD * 2).await;
        tokio::task::yield_now().await;
        assert!(poller.is_finished());
    }
}
