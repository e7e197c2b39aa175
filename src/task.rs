//! Handles for the background polling loops.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A running periodic task together with its stop signal.
#[derive(Debug)]
pub struct PollerHandle {
    name: &'static str,
    cancel_token: CancellationToken,
    handle: JoinHandle<()>,
}

impl PollerHandle {
    /// Run `tick` immediately and then `period` after each tick completes,
    /// until the token is cancelled.
    ///
    /// Each tick is awaited before the wait starts, so a slow backend never
    /// causes overlapping ticks and a timed-out tick is not retried at once.
    pub fn spawn<F, Fut>(
        name: &'static str,
        period: Duration,
        cancel_token: CancellationToken,
        mut tick: F,
    ) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = cancel_token.clone();
        let handle = tokio::spawn(async move {
            tracing::info!(
                poller = name,
                interval_ms = period.as_millis() as u64,
                "Poller started"
            );

            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        tracing::info!(poller = name, "Poller cancelled mid-tick");
                        break;
                    }
                    _ = tick() => {}
                }
                tokio::select! {
                    _ = token.cancelled() => {
                        tracing::info!(poller = name, "Poller shutting down");
                        break;
                    }
                    _ = tokio::time::sleep(period) => {}
                }
            }
        });

        Self {
            name,
            cancel_token,
            handle,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Signal the loop to stop and wait for it to exit.
    pub async fn stop(self) {
        self.cancel_token.cancel();
        if let Err(e) = self.handle.await {
            tracing::warn!(poller = self.name, error = %e, "Poller task ended abnormally");
        }
    }
}
