//! Switching between the Chat, Performance and Alerts views.

use crate::alerts::AlertsController;
use crate::performance::MetricsLoader;
use crate::ui::{UiStore, View};
use std::sync::Arc;

pub struct ViewSwitcher {
    ui: Arc<UiStore>,
    metrics: Arc<MetricsLoader>,
    alerts: Arc<AlertsController>,
}

impl ViewSwitcher {
    pub fn new(
        ui: Arc<UiStore>,
        metrics: Arc<MetricsLoader>,
        alerts: Arc<AlertsController>,
    ) -> Self {
        Self { ui, metrics, alerts }
    }

    /// Make `view` the visible one and run its loader.
    ///
    /// Performance reloads metrics and Alerts redraws the list right away.
    /// Chat keeps its conversation as it is. Loader failures are logged by the
    /// loaders and leave the previous contents in place.
    pub async fn switch(&self, view: View) {
        self.ui.set_active_view(view);
        tracing::debug!(view = view.as_str(), "View switched");

        match view {
            View::Chat => {}
            View::Performance => {
                let _ = self.metrics.load().await;
            }
            View::Alerts => {
                let _ = self.alerts.refresh().await;
            }
        }
    }

    pub fn active(&self) -> View {
        self.ui.active_view()
    }
}
