//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML. Every field has a
//! default so the application works without a config file.

use anyhow::{bail, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://apifaltades.pezmosca.com";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the Faltadas service lives and how often to ask it for the count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// chrono format for event dates in the history list.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// chrono format for sync times in the status bar.
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

impl UiConfig {
    /// Reject strftime patterns chrono cannot render; formatting one would
    /// fail at draw time.
    pub fn validate(&self) -> Result<()> {
        for (name, pattern) in [("date_format", &self.date_format), ("time_format", &self.time_format)] {
            if !is_valid_strftime(pattern) {
                bail!("Invalid ui.{} {:?}", name, pattern);
            }
        }
        Ok(())
    }
}

fn is_valid_strftime(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            time_format: default_time_format(),
        }
    }
}

/// Diagnostic log written with `tracing`. The terminal belongs to the UI, so
/// this always goes to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}
fn default_request_timeout() -> u64 {
    10
}
fn default_poll_interval() -> u64 {
    60
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
fn default_time_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_true() -> bool {
    true
}
fn default_log_dir() -> String {
    "~/.local/share/faltadas/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
