//! Console wiring.
//!
//! Builds one gateway, one UI store and every controller on top of them,
//! and owns the lifetime of the two background loops. Front-ends (the
//! terminal REPL, tests, or an embedder) drive the console through the
//! controller accessors and observe it through [`UiStore::subscribe`].

use crate::alerts::AlertsController;
use crate::api::{HttpGateway, NetworkError, PilotApi};
use crate::chat::ChatController;
use crate::config::{ConsoleConfig, PollingConfig};
use crate::health::HealthPoller;
use crate::history::HistoryLoader;
use crate::performance::MetricsLoader;
use crate::task::PollerHandle;
use crate::ui::UiStore;
use crate::view::ViewSwitcher;
use std::sync::{Arc, Mutex, PoisonError};
use tokio_util::sync::CancellationToken;

pub struct Console {
    ui: Arc<UiStore>,
    chat: Arc<ChatController>,
    health: Arc<HealthPoller>,
    history: Arc<HistoryLoader>,
    metrics: Arc<MetricsLoader>,
    alerts: Arc<AlertsController>,
    views: ViewSwitcher,
    cancel_token: CancellationToken,
    pollers: Mutex<Vec<PollerHandle>>,
}

impl Console {
    /// Build a console talking HTTP to the configured backend.
    pub fn new(config: &ConsoleConfig) -> Result<Self, NetworkError> {
        let gateway = HttpGateway::new(&config.api)?;
        tracing::debug!(base_url = %gateway.base_url(), "Gateway ready");
        Ok(Self::with_api(Arc::new(gateway), &config.polling))
    }

    /// Build a console on top of any [`PilotApi`] implementation.
    pub fn with_api(api: Arc<dyn PilotApi>, polling: &PollingConfig) -> Self {
        let ui = Arc::new(UiStore::new());
        let metrics = Arc::new(MetricsLoader::new(api.clone(), ui.clone()));
        let alerts = Arc::new(AlertsController::new(
            api.clone(),
            ui.clone(),
            polling.alerts_interval(),
        ));

        Self {
            chat: Arc::new(ChatController::new(api.clone(), ui.clone())),
            health: Arc::new(HealthPoller::new(
                api.clone(),
                ui.clone(),
                polling.health_interval(),
            )),
            history: Arc::new(HistoryLoader::new(api, ui.clone())),
            views: ViewSwitcher::new(ui.clone(), metrics.clone(), alerts.clone()),
            metrics,
            alerts,
            ui,
            cancel_token: CancellationToken::new(),
            pollers: Mutex::new(Vec::new()),
        }
    }

    /// Start both pollers and load the conversation history.
    ///
    /// Calling this again while the pollers run does nothing. A console is
    /// single-use: after [`Console::shutdown`] this does nothing either.
    pub async fn start(&self) {
        if self.cancel_token.is_cancelled() {
            tracing::warn!("Console already shut down, not restarting");
            return;
        }
        {
            let mut pollers = self.pollers.lock().unwrap_or_else(PoisonError::into_inner);
            if !pollers.is_empty() {
                return;
            }
            pollers.push(Arc::clone(&self.health).start(self.cancel_token.child_token()));
            pollers.push(Arc::clone(&self.alerts).start(self.cancel_token.child_token()));
        }
        tracing::info!("Console started");

        // Failure already logged; the welcome state stays empty until the next launch.
        let _ = self.history.load().await;
    }

    /// Stop both pollers and wait for them to exit.
    pub async fn shutdown(&self) {
        self.cancel_token.cancel();
        let pollers =
            std::mem::take(&mut *self.pollers.lock().unwrap_or_else(PoisonError::into_inner));
        for poller in pollers {
            tracing::debug!(poller = poller.name(), "Stopping poller");
            poller.stop().await;
        }
        tracing::info!("Console stopped");
    }

    pub fn ui(&self) -> &Arc<UiStore> {
        &self.ui
    }

    pub fn chat(&self) -> &ChatController {
        &self.chat
    }

    pub fn health(&self) -> &HealthPoller {
        &self.health
    }

    pub fn history(&self) -> &HistoryLoader {
        &self.history
    }

    pub fn metrics(&self) -> &MetricsLoader {
        &self.metrics
    }

    pub fn alerts(&self) -> &AlertsController {
        &self.alerts
    }

    pub fn views(&self) -> &ViewSwitcher {
        &self.views
    }
}
