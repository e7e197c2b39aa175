//! Background polling configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Periods of the two background loops
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Seconds between health probes
    pub health_interval_seconds: u64,
    /// Seconds between alert fetches
    pub alerts_interval_seconds: u64,
}

impl PollingConfig {
    pub fn health_interval(&self) -> Duration {
        Duration::from_secs(self.health_interval_seconds)
    }

    pub fn alerts_interval(&self) -> Duration {
        Duration::from_secs(self.alerts_interval_seconds)
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            health_interval_seconds: 5,
            alerts_interval_seconds: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polling_config_defaults() {
        let config = PollingConfig::default();
        assert_eq!(config.health_interval(), Duration::from_secs(5));
        assert_eq!(config.alerts_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_polling_config_partial_toml() {
        let config: PollingConfig = toml::from_str("alerts_interval_seconds = 30").unwrap();
        assert_eq!(config.alerts_interval_seconds, 30);
        assert_eq!(config.health_interval_seconds, 5);
    }
}
