//! Statusboard - dashboard-side poller for a monitor bot backend
//!
//! Polls the backend's status and log endpoints on a repeating tick and
//! renders the results into a region panel.

pub mod client;
pub mod config;
pub mod error;
pub mod gate;
pub mod io;
pub mod model;
pub mod panel;
pub mod poller;
pub mod render;

pub use config::{load_config, Config};
pub use error::{Result, StatusboardError};

use std::sync::Arc;
use std::time::Duration;

use crate::client::DashboardClient;
use crate::gate::{ProbabilityGate, RefreshGate};
use crate::io::ReqwestHttpClient;
use crate::panel::{ConsoleRenderer, DashboardPanel};
use crate::poller::Poller;
use crate::render::Renderer;

/// Run the statusboard service with the given configuration.
///
/// Polls until a ctrl-c is received, then stops the poller and returns.
pub async fn run(config: Config) -> Result<()> {
    config.validate()?;

    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::default());
    let client = Arc::new(DashboardClient::new(&config.backend, http));

    // Startup probes. Both are informational: an unreachable backend is
    // logged and polling starts anyway.
    match client.probe_health().await {
        Ok(health) => tracing::info!(
            "Backend healthy: status={}, bot_active={}",
            health.status,
            health.bot_active
        ),
        Err(e) => tracing::warn!("Backend health probe failed: {}", e),
    }
    match client.fetch_backend_config().await {
        Ok(value) => tracing::info!("Backend config: {}", value),
        Err(e) => tracing::warn!("Backend config fetch failed: {}", e),
    }

    let panel = Arc::new(DashboardPanel::new());
    let renderer: Arc<dyn Renderer> = Arc::new(ConsoleRenderer::new(Arc::clone(&panel)));
    let gate: Arc<dyn RefreshGate> = Arc::new(ProbabilityGate::new(config.log_refresh_probability));

    let mut poller = Poller::new(
        client,
        renderer,
        gate,
        Duration::from_millis(config.poll_interval_ms),
    );

    poller.start().await;
    tracing::info!(
        "Statusboard polling {} every {}ms",
        config.backend.base_url(),
        config.poll_interval_ms
    );

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");

    poller.stop().await;
    tracing::info!("Statusboard stopped");

    Ok(())
}
