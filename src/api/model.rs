//! Wire types for the Faltadas REST API.
//!
//! Field names on the wire (`motivo`, `created_at`) are fixed by the server;
//! the Rust side calls the description `reason`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A logged event as returned by `GET /faltadas/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Faltada {
    pub id: i64,
    pub author: String,
    #[serde(rename = "motivo")]
    pub reason: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /faltadas/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFaltada {
    pub author: String,
    #[serde(rename = "motivo")]
    pub reason: String,
}

/// Response body of `GET /faltadas/count`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

/// Parse a server timestamp. The server stores naive UTC datetimes, so values
/// without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}
