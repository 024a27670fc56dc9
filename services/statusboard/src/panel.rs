//! In-memory dashboard panel and its console view
//!
//! `DashboardPanel` is the concrete binding of rendered values to display
//! regions, addressed by region identifier. Hosts embed the panel and read
//! regions back out; the CLI wraps it in a `ConsoleRenderer` that mirrors
//! every update to stdout.

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::model::LogBundle;
use crate::render::{Renderer, StatusView};

/// Region holding the bot's Active/Inactive label
pub const BOT_STATUS: &str = "bot-status";
/// Region holding the stringified check counter
pub const CHECKS_PERFORMED: &str = "checks-performed";
/// Region holding the run duration or its placeholder
pub const DURATION: &str = "duration";
/// Region holding the server-formatted timestamp
pub const CURRENT_TIME: &str = "current-time";
/// Region holding one child entry per log line
pub const LOGS_CONTAINER: &str = "logs-container";

/// A single text region with an optional style class
#[derive(Debug, Clone, Default)]
struct Region {
    text: String,
    style_class: Option<String>,
}

#[derive(Debug, Default)]
struct PanelInner {
    regions: HashMap<&'static str, Region>,
    log_entries: Vec<String>,
    scroll_offset: usize,
}

/// Region-addressed display surface
#[derive(Debug, Default)]
pub struct DashboardPanel {
    inner: Mutex<PanelInner>,
}

impl DashboardPanel {
    pub fn new() -> Self {
        Self::default()
    }

    fn inner(&self) -> MutexGuard<'_, PanelInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Text content of a region, if it has been rendered yet
    pub fn region_text(&self, id: &str) -> Option<String> {
        self.inner().regions.get(id).map(|r| r.text.clone())
    }

    /// Style class of a region, if one is set
    pub fn region_class(&self, id: &str) -> Option<String> {
        self.inner()
            .regions
            .get(id)
            .and_then(|r| r.style_class.clone())
    }

    /// Current children of the log container, in display order
    pub fn log_entries(&self) -> Vec<String> {
        self.inner().log_entries.clone()
    }

    /// Current scroll offset of the log container
    pub fn scroll_offset(&self) -> usize {
        self.inner().scroll_offset
    }

    /// Maximum scroll offset of the log container
    pub fn max_scroll(&self) -> usize {
        self.inner().log_entries.len()
    }

    /// Render the panel as console lines
    pub fn to_lines(&self) -> Vec<String> {
        let inner = self.inner();
        let region = |id: &str| {
            inner
                .regions
                .get(id)
                .map(|r| r.text.clone())
                .unwrap_or_default()
        };

        let mut lines = vec![
            format!("Status:   {}", region(BOT_STATUS)),
            format!("Checks:   {}", region(CHECKS_PERFORMED)),
            format!("Duration: {}", region(DURATION)),
            format!("Time:     {}", region(CURRENT_TIME)),
            format!("Logs ({}):", inner.log_entries.len()),
        ];
        lines.extend(inner.log_entries.iter().map(|l| format!("  {}", l)));
        lines
    }
}

impl Renderer for DashboardPanel {
    fn render_status(&self, view: &StatusView) {
        let mut inner = self.inner();
        inner.regions.insert(
            BOT_STATUS,
            Region {
                text: view.label.clone(),
                style_class: Some(view.style_class.clone()),
            },
        );
        inner.regions.insert(
            CHECKS_PERFORMED,
            Region {
                text: view.checks.clone(),
                style_class: None,
            },
        );
        inner.regions.insert(
            DURATION,
            Region {
                text: view.duration.clone(),
                style_class: None,
            },
        );
        inner.regions.insert(
            CURRENT_TIME,
            Region {
                text: view.time.clone(),
                style_class: None,
            },
        );
    }

    fn render_logs(&self, bundle: &LogBundle) {
        let mut inner = self.inner();
        inner.log_entries.clear();
        inner.log_entries.extend(bundle.logs.iter().cloned());
        inner.scroll_offset = inner.log_entries.len();
    }
}

/// Console view over a panel: applies every update to the panel, then
/// redraws the whole panel to stdout
#[derive(Debug)]
pub struct ConsoleRenderer {
    panel: Arc<DashboardPanel>,
}

impl ConsoleRenderer {
    pub fn new(panel: Arc<DashboardPanel>) -> Self {
        Self { panel }
    }

    fn draw_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "-- statusboard {}", "-".repeat(40))?;
        for line in self.panel.to_lines() {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    fn redraw(&self) {
        let stdout = std::io::stdout();
        if let Err(e) = self.draw_to(&mut stdout.lock()) {
            tracing::warn!("Console redraw failed: {}", e);
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render_status(&self, view: &StatusView) {
        self.panel.render_status(view);
        self.redraw();
    }

    fn render_logs(&self, bundle: &LogBundle) {
        self.panel.render_logs(bundle);
        self.redraw();
    }
}
