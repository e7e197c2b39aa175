//! Health polling for backend and model readiness.
//!
//! The poller probes `/health` on a fixed period for the lifetime of the
//! console. While the backend reports its model as downloading, the input
//! gate is closed and a banner names the model; any other report opens the
//! gate and removes the banner. Failed probes change nothing on screen and
//! are simply retried on the next tick.
//!
//! The poller is the only writer of [`Region::InputGate`](crate::ui::Region::InputGate)
//! and [`Region::Banner`](crate::ui::Region::Banner).

mod state;


pub use state::Readiness;

use crate::api::{NetworkError, PilotApi};
use crate::task::PollerHandle;
use crate::ui::{InputGate, UiStore};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Background service that tracks backend readiness.
pub struct HealthPoller {
    api: Arc<dyn PilotApi>,
    ui: Arc<UiStore>,
    interval: Duration,
    /// Last applied state, for transition logging
    last: Mutex<Option<Readiness>>,
}

impl HealthPoller {
    pub fn new(api: Arc<dyn PilotApi>, ui: Arc<UiStore>, interval: Duration) -> Self {
        Self {
            api,
            ui,
            interval,
            last: Mutex::new(None),
        }
    }

    /// Probe once and apply the result.
    ///
    /// On failure the visible state is left untouched.
    pub async fn check_once(&self) -> Result<Readiness, NetworkError> {
        match self.api.get_health().await {
            Ok(health) => {
                let readiness = Readiness::from(&health);
                self.apply(&readiness);
                Ok(readiness)
            }
            Err(e) => {
                metrics::counter!("logpilot_poll_failures_total", "loop" => "health").increment(1);
                tracing::warn!(error = %e, "Health check failed, retrying next cycle");
                Err(e)
            }
        }
    }

    /// Write the gate and banner for `readiness`.
    pub fn apply(&self, readiness: &Readiness) {
        let gate = if readiness.is_blocked() {
            InputGate::blocked()
        } else {
            InputGate::ready()
        };
        self.ui.set_input_gate(gate);
        self.ui.set_banner(readiness.banner());

        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        if last.as_ref() != Some(readiness) {
            tracing::info!(
                old_state = ?last,
                new_state = ?readiness,
                "Backend readiness changed"
            );
            *last = Some(readiness.clone());
        }
    }

    /// Start polling immediately and then every interval until cancelled.
    pub fn start(self: Arc<Self>, cancel_token: CancellationToken) -> PollerHandle {
        let period = self.interval;
        PollerHandle::spawn("health", period, cancel_token, move || {
            let poller = Arc::clone(&self);
            async move {
                let _ = poller.check_once().await;
                tracing::debug!("Health check cycle completed");
            }
        })
    }
}
