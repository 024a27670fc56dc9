//! Renderer seam and display value derivation

use crate::model::{LogBundle, StatusSnapshot};

/// Status label shown for an active bot
pub const ACTIVE_LABEL: &str = "Active";
/// Status label shown for an inactive bot
pub const INACTIVE_LABEL: &str = "Inactive";
/// Style class for an active bot
pub const ACTIVE_CLASS: &str = "status-active";
/// Style class for an inactive bot
pub const INACTIVE_CLASS: &str = "status-inactive";
/// Placeholder shown while the bot has no run duration yet
pub const NOT_STARTED: &str = "Not started";

/// Display values derived from a status snapshot.
///
/// Pure derivation: a snapshot maps to exactly one view, and rendering a view
/// fully overwrites whatever was displayed before.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub label: String,
    pub style_class: String,
    pub checks: String,
    pub duration: String,
    pub time: String,
}

impl From<&StatusSnapshot> for StatusView {
    fn from(snapshot: &StatusSnapshot) -> Self {
        let (label, style_class) = if snapshot.active {
            (ACTIVE_LABEL, ACTIVE_CLASS)
        } else {
            (INACTIVE_LABEL, INACTIVE_CLASS)
        };

        Self {
            label: label.to_string(),
            style_class: style_class.to_string(),
            checks: snapshot.checks_performed.to_string(),
            duration: snapshot
                .duration
                .clone()
                .unwrap_or_else(|| NOT_STARTED.to_string()),
            time: snapshot.current_time.clone(),
        }
    }
}

/// Trait for rendering fetched payloads into a display surface.
///
/// The poller depends only on this trait; the concrete binding to display
/// regions lives in an adapter.
pub trait Renderer: Send + Sync + std::fmt::Debug {
    /// Overwrite the status regions with the given view
    fn render_status(&self, view: &StatusView);

    /// Replace the entire log region with the bundle's lines, in order,
    /// and scroll the region to its bottom edge
    fn render_logs(&self, bundle: &LogBundle);
}
