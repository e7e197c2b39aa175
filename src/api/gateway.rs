//! reqwest-backed implementation of [`PilotApi`].

use super::{
    Alert, ChatMessage, HealthStatus, MetricsSnapshot, NetworkError, PilotApi, QueryRequest,
    QueryResponse,
};
use crate::config::ApiConfig;
use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Longest slice of an error body kept in [`NetworkError::Status`].
const MAX_ERROR_BODY: usize = 200;

/// HTTP gateway to the LogPilot backend.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: Url,
    client: Client,
    timeout_seconds: u64,
    health_timeout_seconds: u64,
}

impl HttpGateway {
    /// Create a gateway with its own pooled HTTP client.
    pub fn new(config: &ApiConfig) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| NetworkError::Transport(e.to_string()))?;
        Self::with_client(config, client)
    }

    /// Create a gateway around an existing client (for testing).
    pub fn with_client(config: &ApiConfig, client: Client) -> Result<Self, NetworkError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| NetworkError::Transport(format!("invalid base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(NetworkError::Transport(format!(
                "invalid base URL: {}",
                config.base_url
            )));
        }

        Ok(Self {
            base_url,
            client,
            timeout_seconds: config.timeout_seconds,
            health_timeout_seconds: config.health_timeout_seconds,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL under the base, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&QueryRequest>,
        timeout_seconds: u64,
    ) -> Result<String, NetworkError> {
        let mut request = self
            .client
            .request(method, url)
            .timeout(Duration::from_secs(timeout_seconds));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| NetworkError::from_reqwest(e, timeout_seconds))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| NetworkError::from_reqwest(e, timeout_seconds))?;

        if !status.is_success() {
            let mut body = text;
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|&i| body.is_char_boundary(i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            return Err(NetworkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(text)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        timeout_seconds: u64,
    ) -> Result<T, NetworkError> {
        let body = self
            .send(Method::GET, self.endpoint(segments), None, timeout_seconds)
            .await?;
        decode(&body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, NetworkError> {
    serde_json::from_str(body).map_err(|e| NetworkError::Decode(e.to_string()))
}

#[async_trait]
impl PilotApi for HttpGateway {
    async fn submit_query(&self, text: &str) -> Result<QueryResponse, NetworkError> {
        let request = QueryRequest {
            query: text.to_string(),
        };
        let body = self
            .send(
                Method::POST,
                self.endpoint(&["query"]),
                Some(&request),
                self.timeout_seconds,
            )
            .await?;
        decode(&body)
    }

    async fn get_health(&self) -> Result<HealthStatus, NetworkError> {
        self.get_json(&["health"], self.health_timeout_seconds).await
    }

    async fn get_history(&self) -> Result<Vec<ChatMessage>, NetworkError> {
        self.get_json(&["history"], self.timeout_seconds).await
    }

    async fn get_metrics(&self) -> Result<MetricsSnapshot, NetworkError> {
        self.get_json(&["metrics"], self.timeout_seconds).await
    }

    async fn get_alerts(&self) -> Result<Vec<Alert>, NetworkError> {
        self.get_json(&["alerts"], self.timeout_seconds).await
    }

    async fn dismiss_alert(&self, id: &str) -> Result<(), NetworkError> {
        self.send(
            Method::POST,
            self.endpoint(&["alerts", id, "read"]),
            None,
            self.timeout_seconds,
        )
        .await
        .map(|_| ())
    }
}
