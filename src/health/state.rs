//! Readiness derived from a health snapshot.

use crate::api::HealthStatus;

/// Two-state UI mode driven by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    /// Backend can take queries
    Ready,
    /// Backend is still downloading `model`
    Blocked { model: String },
}

impl Readiness {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Readiness::Blocked { .. })
    }

    /// Banner text for this state, if any.
    pub fn banner(&self) -> Option<String> {
        match self {
            Readiness::Ready => None,
            Readiness::Blocked { model } => {
                Some(format!("Model is downloading... ({}). Please wait.", model))
            }
        }
    }
}

impl From<&HealthStatus> for Readiness {
    fn from(health: &HealthStatus) -> Self {
        match health.downloading_model() {
            Some(model) => Readiness::Blocked {
                model: model.to_string(),
            },
            None => Readiness::Ready,
        }
    }
}
