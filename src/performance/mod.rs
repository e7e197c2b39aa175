//! On-demand loader for the Performance view.
//!
//! Runs each time the view is activated; never polled. Every successful
//! load replaces the cards and the history table wholesale.

use crate::api::{MetricsSnapshot, NetworkError, PilotApi};
use crate::render::{render_metrics_row, render_metrics_summary};
use crate::ui::UiStore;
use std::sync::Arc;

pub struct MetricsLoader {
    api: Arc<dyn PilotApi>,
    ui: Arc<UiStore>,
}

impl MetricsLoader {
    pub fn new(api: Arc<dyn PilotApi>, ui: Arc<UiStore>) -> Self {
        Self { api, ui }
    }

    /// Fetch metrics and redraw the Performance view.
    ///
    /// On failure the previous contents stay on screen.
    pub async fn load(&self) -> Result<MetricsSnapshot, NetworkError> {
        let snapshot = match self.api.get_metrics().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load metrics");
                return Err(e);
            }
        };

        let rows = snapshot.history.iter().map(render_metrics_row).collect();
        self.ui.set_metrics(render_metrics_summary(&snapshot), rows);

        tracing::debug!(
            runs = snapshot.history.len(),
            pass_rate_24h = snapshot.pass_rate_24h,
            "Metrics loaded"
        );
        Ok(snapshot)
    }
}
