//! Canned [`PilotApi`] for unit tests.

use super::{
    Alert, ChatMessage, HealthStatus, MetricsSnapshot, NetworkError, PilotApi, QueryResponse,
};
use async_trait::async_trait;
use std::sync::Mutex;

/// Answers every call from fixed data; `fail` makes every call error.
#[derive(Default)]
pub struct StubApi {
    pub answer: QueryResponse,
    pub health: HealthStatus,
    pub history: Vec<ChatMessage>,
    pub metrics: MetricsSnapshot,
    pub alerts: Mutex<Vec<Alert>>,
    pub fail: bool,
}

impl StubApi {
    fn check(&self) -> Result<(), NetworkError> {
        if self.fail {
            Err(NetworkError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PilotApi for StubApi {
    async fn submit_query(&self, _text: &str) -> Result<QueryResponse, NetworkError> {
        self.check()?;
        Ok(self.answer.clone())
    }

    async fn get_health(&self) -> Result<HealthStatus, NetworkError> {
        self.check()?;
        Ok(self.health.clone())
    }

    async fn get_history(&self) -> Result<Vec<ChatMessage>, NetworkError> {
        self.check()?;
        Ok(self.history.clone())
    }

    async fn get_metrics(&self) -> Result<MetricsSnapshot, NetworkError> {
        self.check()?;
        Ok(self.metrics.clone())
    }

    async fn get_alerts(&self) -> Result<Vec<Alert>, NetworkError> {
        self.check()?;
        Ok(self.alerts.lock().unwrap().clone())
    }

    async fn dismiss_alert(&self, id: &str) -> Result<(), NetworkError> {
        self.check()?;
        self.alerts.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }
}

pub fn alert(id: &str, service: &str) -> Alert {
    Alert {
        id: id.to_string(),
        service: service.to_string(),
        message: "error rate above threshold".to_string(),
        analysis: "upstream timeouts".to_string(),
        timestamp: "2024-05-01T10:00:00Z".to_string(),
    }
}
