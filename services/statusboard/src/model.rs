//! Response shapes consumed from the reporting backend
//!
//! All of these are transient: fetched fresh every cycle, rendered, and
//! discarded. Unknown fields in the wire payloads are ignored.

use serde::Deserialize;

/// A point-in-time status payload from `GET /api/status`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusSnapshot {
    pub active: bool,
    pub checks_performed: u64,
    /// Absent or null means the bot has not started yet
    #[serde(default)]
    pub duration: Option<String>,
    pub current_time: String,
}

/// A full ordered log listing from `GET /api/logs`, oldest first
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogBundle {
    pub logs: Vec<String>,
}

/// Health probe payload from `GET /health`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackendHealth {
    pub status: String,
    pub timestamp: String,
    pub bot_active: bool,
}
