mod api;
mod app;
mod config;
mod logging;
mod poller;
mod ui;

use crate::api::client::HttpBackend;
use crate::api::sync::SyncClient;
use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    let log_path = logging::init(&cfg.logging);
    tracing::info!("Starting faltadas {} (log: {:?})", env!("CARGO_PKG_VERSION"), log_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, cfg).await;

    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!("Fatal: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    tracing::info!("Exiting");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let backend = HttpBackend::new(&cfg.api.base_url, cfg.api.request_timeout())
        .context("Failed to build HTTP client")?;
    tracing::info!("Using API at {}", backend.base_url());
    let sync = SyncClient::new(Arc::new(backend), event_tx.clone());
    let poll_interval = cfg.api.poll_interval();
    let mut state = AppState::new(cfg);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Mount: fetch both, then keep the count fresh
    dispatch(&sync, &mut state, handler::refresh());
    let poller = poller::start_polling(event_tx.clone(), poll_interval);

    terminal.draw(|f| ui::render(f, &state))?;

    while let Some(event) = event_rx.recv().await {
        let actions = handler::handle_event(&mut state, event);
        dispatch(&sync, &mut state, actions);

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    poller.cancel();
    Ok(())
}

fn dispatch(sync: &SyncClient, state: &mut AppState, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::FetchCount => sync.fetch_count(),
            Action::FetchEvents => sync.fetch_events(),
            Action::CreateEvent { author, reason } => sync.create_event(author, reason),
            Action::ClearHistory => sync.clear_history(),
            Action::Quit => state.should_quit = true,
        }
    }
}
