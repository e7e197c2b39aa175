//! Backend API configuration

use serde::{Deserialize, Serialize};

/// Where the backend lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin of the LogPilot API, optionally with a path prefix
    pub base_url: String,
    /// Timeout for query, history, metrics and alerts calls
    pub timeout_seconds: u64,
    /// Timeout for a single health probe
    pub health_timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: 120,
            health_timeout_seconds: 5,
        }
    }
}
