//! Alerts controller: badge, list and dismissal.
//!
//! Alerts are polled on a fixed period regardless of the visible view. The
//! badge is updated on every successful poll; the card list is only redrawn
//! while the Alerts view is showing. Dismissing never removes a card
//! locally: it asks the backend, then re-fetches so the list reflects what
//! the backend still reports.

use crate::api::{Alert, NetworkError, PilotApi};
use crate::render::render_alert_card;
use crate::task::PollerHandle;
use crate::ui::{UiStore, View};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub struct AlertsController {
    api: Arc<dyn PilotApi>,
    ui: Arc<UiStore>,
    interval: Duration,
}

impl AlertsController {
    pub fn new(api: Arc<dyn PilotApi>, ui: Arc<UiStore>, interval: Duration) -> Self {
        Self { api, ui, interval }
    }

    /// Fetch active alerts, update the badge, and redraw the list if visible.
    pub async fn refresh(&self) -> Result<Vec<Alert>, NetworkError> {
        let alerts = match self.api.get_alerts().await {
            Ok(alerts) => alerts,
            Err(e) => {
                metrics::counter!("logpilot_poll_failures_total", "loop" => "alerts").increment(1);
                tracing::warn!(error = %e, "Alert check failed");
                return Err(e);
            }
        };

        self.ui.set_alert_badge(alerts.len());

        if self.ui.active_view() == View::Alerts {
            self.ui
                .set_alert_list(alerts.iter().map(render_alert_card).collect());
        }

        tracing::debug!(active = alerts.len(), "Alerts refreshed");
        Ok(alerts)
    }

    /// Ask the backend to dismiss `id`, then refresh whatever the outcome.
    ///
    /// The dismiss result is returned; a failure of the follow-up refresh is
    /// only logged.
    pub async fn dismiss(&self, id: &str) -> Result<(), NetworkError> {
        let result = self.api.dismiss_alert(id).await;
        match &result {
            Ok(()) => tracing::info!(alert_id = id, "Alert dismissed"),
            Err(e) => {
                metrics::counter!("logpilot_alert_dismiss_failures_total").increment(1);
                tracing::error!(alert_id = id, error = %e, "Failed to dismiss alert");
            }
        }

        let _ = self.refresh().await;
        result
    }

    /// Start polling immediately and then every interval until cancelled.
    pub fn start(self: Arc<Self>, cancel_token: CancellationToken) -> PollerHandle {
        let period = self.interval;
        PollerHandle::spawn("alerts", period, cancel_token, move || {
            let controller = Arc::clone(&self);
            async move {
                let _ = controller.refresh().await;
            }
        })
    }
}
