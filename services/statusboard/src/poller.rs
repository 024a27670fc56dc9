//! Poller: drives the client and renderer on a repeating tick

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::client::DashboardClient;
use crate::gate::RefreshGate;
use crate::render::{Renderer, StatusView};

/// Polls the backend on a fixed tick and writes results into the renderer.
///
/// Status is fetched on every tick; logs only when the gate says so. A tick's
/// fetches are awaited before the next tick is scheduled, so responses are
/// applied in request order.
pub struct Poller {
    client: Arc<DashboardClient>,
    renderer: Arc<dyn Renderer>,
    gate: Arc<dyn RefreshGate>,
    interval: Duration,
    cancel: Option<CancellationToken>,
    task: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for Poller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poller")
            .field("interval", &self.interval)
            .field("running", &self.task.is_some())
            .finish()
    }
}

impl Poller {
    pub fn new(
        client: Arc<DashboardClient>,
        renderer: Arc<dyn Renderer>,
        gate: Arc<dyn RefreshGate>,
        interval: Duration,
    ) -> Self {
        Self {
            client,
            renderer,
            gate,
            interval,
            cancel: None,
            task: None,
        }
    }

    /// Fetch and render the current status. Failures are logged and the
    /// display is left untouched.
    pub async fn refresh_status(&self) {
        refresh_status(&self.client, self.renderer.as_ref()).await;
    }

    /// Fetch and render the current logs. Same failure policy as status.
    pub async fn refresh_logs(&self) {
        refresh_logs(&self.client, self.renderer.as_ref()).await;
    }

    /// One immediate status + log refresh pair, for external callers
    pub async fn refresh_all(&self) {
        self.refresh_status().await;
        self.refresh_logs().await;
    }

    /// Whether the tick task is currently scheduled
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Perform one immediate refresh pair, then schedule the repeating tick.
    /// Calling start on a running poller is a logged no-op.
    pub async fn start(&mut self) {
        if self.task.is_some() {
            tracing::warn!("Poller already running, ignoring start");
            return;
        }

        self.refresh_all().await;

        let cancel = CancellationToken::new();
        let client = Arc::clone(&self.client);
        let renderer = Arc::clone(&self.renderer);
        let gate = Arc::clone(&self.gate);
        let interval = self.interval;
        let cancel_for_task = cancel.clone();

        let task = tokio::spawn(async move {
            tick_loop(client, renderer, gate, interval, cancel_for_task).await;
        });

        self.cancel = Some(cancel);
        self.task = Some(task);
        tracing::debug!("Poller started with interval {:?}", self.interval);
    }

    /// Cancel the tick task and wait for it to finish. Safe to call when no
    /// tick is scheduled.
    pub async fn stop(&mut self) {
        let Some(cancel) = self.cancel.take() else {
            tracing::debug!("Poller not running, stop is a no-op");
            return;
        };
        cancel.cancel();

        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        tracing::debug!("Poller stopped");
    }
}

async fn tick_loop(
    client: Arc<DashboardClient>,
    renderer: Arc<dyn Renderer>,
    gate: Arc<dyn RefreshGate>,
    interval: Duration,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = cancel.cancelled() => {
                tracing::debug!("Polling loop cancelled");
                break;
            }
        }

        refresh_status(&client, renderer.as_ref()).await;

        if gate.should_refresh() {
            refresh_logs(&client, renderer.as_ref()).await;
        } else {
            tracing::trace!("Skipping log refresh this tick");
        }
    }
}

async fn refresh_status(client: &DashboardClient, renderer: &dyn Renderer) {
    match client.fetch_status().await {
        Ok(snapshot) => renderer.render_status(&StatusView::from(&snapshot)),
        Err(e) => tracing::warn!("Status refresh failed: {}", e),
    }
}

async fn refresh_logs(client: &DashboardClient, renderer: &dyn Renderer) {
    match client.fetch_logs().await {
        Ok(bundle) => renderer.render_logs(&bundle),
        Err(e) => tracing::warn!("Log refresh failed: {}", e),
    }
}
