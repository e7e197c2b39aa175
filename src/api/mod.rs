//! Typed access to the LogPilot backend HTTP surface.
//!
//! | Endpoint | Method | Response |
//! |---|---|---|
//! | `/query` | POST | [`QueryResponse`] |
//! | `/health` | GET | [`HealthStatus`] |
//! | `/history` | GET | `Vec<ChatMessage>` |
//! | `/metrics` | GET | [`MetricsSnapshot`] |
//! | `/alerts` | GET | `Vec<Alert>` |
//! | `/alerts/{id}/read` | POST | ignored |
//!
//! No call retries on its own. Retry policy belongs to the controllers:
//! the health and alerts pollers retry on their next tick, chat submission
//! never retries.

pub mod error;
pub mod gateway;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use error::NetworkError;
pub use gateway::HttpGateway;
pub use types::{
    Alert, ChatMessage, HealthStatus, LlmStatus, MetricsSnapshot, QueryRequest, QueryResponse,
    Role, RunRecord,
};

use async_trait::async_trait;

/// Backend operations used by the controllers.
///
/// Object-safe so controllers can share an `Arc<dyn PilotApi>`.
#[async_trait]
pub trait PilotApi: Send + Sync + 'static {
    /// Submit a natural-language query.
    async fn submit_query(&self, text: &str) -> Result<QueryResponse, NetworkError>;

    /// Backend and model readiness. Callers treat failure as "unknown, retry later".
    async fn get_health(&self) -> Result<HealthStatus, NetworkError>;

    /// Prior conversation in server order.
    async fn get_history(&self) -> Result<Vec<ChatMessage>, NetworkError>;

    /// Aggregate evaluation statistics.
    async fn get_metrics(&self) -> Result<MetricsSnapshot, NetworkError>;

    /// Currently active alerts.
    async fn get_alerts(&self) -> Result<Vec<Alert>, NetworkError>;

    /// Ask the backend to mark an alert as read.
    async fn dismiss_alert(&self, id: &str) -> Result<(), NetworkError>;
}
