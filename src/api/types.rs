//! Wire types for the LogPilot backend API.

use serde::{Deserialize, Deserializer, Serialize};

/// Author of a conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[serde(alias = "assistant")]
    Ai,
}

impl Role {
    /// Avatar glyph shown beside messages from this role.
    pub fn avatar(self) -> &'static str {
        match self {
            Role::User => "👤",
            Role::Ai => "🤖",
        }
    }

    /// CSS class name used on the message container.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Ai => "ai",
        }
    }
}

/// A single entry of the server-side conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: Role::Ai,
            content: content.into(),
        }
    }
}

/// Body of `POST /query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Answer to a submitted query, with optional trace data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
    /// Execution result of `sql`; structured results are pretty-printed.
    #[serde(
        default,
        deserialize_with = "string_or_json",
        skip_serializing_if = "Option::is_none"
    )]
    pub sql_result: Option<String>,
    /// Retrieved documents used to ground the answer.
    #[serde(
        default,
        deserialize_with = "string_or_json",
        skip_serializing_if = "Option::is_none"
    )]
    pub context: Option<String>,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl QueryResponse {
    /// Generated SQL; an empty string counts as absent.
    pub fn sql(&self) -> Option<&str> {
        non_empty(&self.sql)
    }

    /// Execution result of the SQL; an empty string counts as absent.
    pub fn sql_result(&self) -> Option<&str> {
        non_empty(&self.sql_result)
    }

    /// Retrieved context; an empty string counts as absent.
    pub fn context(&self) -> Option<&str> {
        non_empty(&self.context)
    }

    /// True when the response carries anything for the trace block.
    pub fn has_trace(&self) -> bool {
        self.sql().is_some() || self.context().is_some()
    }
}

/// Accepts a JSON string as-is, `null` as absent, and any other value as pretty JSON.
fn string_or_json<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(
            serde_json::to_string_pretty(&other).unwrap_or_else(|_| other.to_string()),
        ),
    })
}

/// Readiness report of the language model behind the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmStatus {
    pub status: String,
    #[serde(default)]
    pub model: String,
}

impl LlmStatus {
    /// The backend reports this while the model weights are still being fetched.
    pub const DOWNLOADING: &'static str = "downloading";

    pub fn is_downloading(&self) -> bool {
        self.status == Self::DOWNLOADING
    }
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm: Option<LlmStatus>,
}

impl HealthStatus {
    /// Model name when the backend is still downloading it, `None` when ready.
    pub fn downloading_model(&self) -> Option<&str> {
        self.llm
            .as_ref()
            .filter(|llm| llm.is_downloading())
            .map(|llm| llm.model.as_str())
    }
}

/// One evaluation run in the performance history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub run_id: String,
    pub timestamp: String,
    pub pass_rate: f64,
}

/// Response of `GET /metrics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub pass_rate_24h: f64,
    pub avg_latency_24h: f64,
    pub total_runs: u64,
    #[serde(default)]
    pub history: Vec<RunRecord>,
}

/// An active anomaly reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub service: String,
    pub message: String,
    #[serde(default)]
    pub analysis: String,
    pub timestamp: String,
}
