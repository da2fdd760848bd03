//! Diagnostic logging to disk.
//!
//! The terminal is owned by the UI, so `tracing` output goes to a daily file
//! named `faltadas_<date>.log` inside the configured log directory (default:
//! `~/.local/share/faltadas/logs/`).

use crate::config::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging is disabled or the file cannot be opened; neither stops the app.
pub fn init(config: &LoggingConfig) -> Option<PathBuf> {
    if !config.enabled {
        return None;
    }

    let log_dir = expand_home(&config.log_dir);
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let path = log_dir.join(log_file_name(&date));

    fs::create_dir_all(&log_dir).ok()?;
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let level = parse_level(&config.level);
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .ok()?;

    Some(path)
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(dir: &str) -> PathBuf {
    match dir.strip_prefix('~') {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
            None => PathBuf::from(dir),
        },
        None => PathBuf::from(dir),
    }
}

fn log_file_name(date: &str) -> String {
    format!("faltadas_{}.log", date)
}

fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}
