//! Mock reporting backend for testing
//!
//! Serves the four backend endpoints with synthetic state: the check counter
//! increments on every status request, the log ring grows alongside it, and
//! the bot reports itself idle until the first check has been observed.
//!
//! Usage:
//!   mock_backend [--port PORT]
//!
//! The port can also be set via the MOCK_BACKEND_PORT environment variable.
//! Command line argument takes precedence over environment variable.
//! Default port is 5000 (same as the real backend).

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

/// Log lines kept in the ring, matching the real backend's tail length
const LOG_RING_SIZE: usize = 100;

struct MockState {
    checks: AtomicU64,
    first_check_at: Mutex<Option<Instant>>,
    logs: Mutex<VecDeque<String>>,
}

impl MockState {
    fn new() -> Self {
        Self {
            checks: AtomicU64::new(0),
            first_check_at: Mutex::new(None),
            logs: Mutex::new(VecDeque::with_capacity(LOG_RING_SIZE)),
        }
    }

    fn push_log(&self, line: String) {
        let mut logs = self.logs.lock().expect("log ring lock");
        if logs.len() >= LOG_RING_SIZE {
            logs.pop_front();
        }
        logs.push_back(line);
    }
}

fn build_router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/logs", get(logs_handler))
        .route("/api/config", get(config_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn status_handler(State(state): State<Arc<MockState>>) -> impl IntoResponse {
    let previous = state.checks.fetch_add(1, Ordering::SeqCst);
    let now = timestamp();

    let duration = if previous == 0 {
        *state.first_check_at.lock().expect("first check lock") = Some(Instant::now());
        None
    } else {
        let started = *state.first_check_at.lock().expect("first check lock");
        started.map(|s| format_duration(s.elapsed().as_secs()))
    };

    state.push_log(format!("Check {} completed at {}", previous + 1, now));

    Json(serde_json::json!({
        "active": previous > 0,
        "checks_performed": previous,
        "duration": duration,
        "current_time": now,
    }))
}

async fn logs_handler(State(state): State<Arc<MockState>>) -> impl IntoResponse {
    let logs: Vec<String> = state
        .logs
        .lock()
        .expect("log ring lock")
        .iter()
        .cloned()
        .collect();
    Json(serde_json::json!({ "logs": logs }))
}

async fn config_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "monitoring_interval": 10,
        "status_update_interval": 600,
        "web_port": 5000,
    }))
}

async fn health_handler(State(state): State<Arc<MockState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": timestamp(),
        "bot_active": state.checks.load(Ordering::SeqCst) > 0,
    }))
}

fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Compact elapsed-time rendering: "42s", "5m10s", "1h2m"
fn format_duration(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m{}s", secs / 60, secs % 60)
    } else {
        format!("{}h{}m", secs / 3600, (secs % 3600) / 60)
    }
}

#[tokio::main]
async fn main() {
    // Port priority: command line arg > environment variable > default (5000)
    let port = std::env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .or_else(|| {
            std::env::var("MOCK_BACKEND_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
        })
        .unwrap_or(5000u16);

    let state = Arc::new(MockState::new());
    let router = build_router(state);

    let listener = match tokio::net::TcpListener::bind(("127.0.0.1", port)).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to port {}: {}", port, e);
            std::process::exit(1);
        }
    };

    eprintln!("Mock backend listening on port {}", port);

    if let Err(e) = axum::serve(listener, router).await {
        eprintln!("Mock backend exited with error: {}", e);
    }
}
