//! Performance view rendering: summary cards and the run history table.

use super::{escape_html, localize_timestamp};
use crate::api::{MetricsSnapshot, RunRecord};

/// Characters of the run id shown in the history table.
const RUN_ID_PREFIX: usize = 8;

/// Colour band for a run's pass rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassRateTier {
    /// 90 and above
    Success,
    /// 70 up to, not including, 90
    Warning,
    /// Below 70
    Danger,
}

impl PassRateTier {
    pub fn classify(pass_rate: f64) -> Self {
        if pass_rate >= 90.0 {
            PassRateTier::Success
        } else if pass_rate >= 70.0 {
            PassRateTier::Warning
        } else {
            PassRateTier::Danger
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            PassRateTier::Success => "tier-success",
            PassRateTier::Warning => "tier-warning",
            PassRateTier::Danger => "tier-danger",
        }
    }
}

/// One row of the run history table.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsRow {
    pub run_label: String,
    pub timestamp_label: String,
    pub pass_rate_label: String,
    pub tier: PassRateTier,
}

impl MetricsRow {
    pub fn html(&self) -> String {
        format!(
            "<tr><td class=\"run-id\">{}</td><td class=\"run-time\">{}</td><td class=\"pass-rate {}\">{}</td></tr>",
            escape_html(&self.run_label),
            escape_html(&self.timestamp_label),
            self.tier.css_class(),
            escape_html(&self.pass_rate_label),
        )
    }
}

pub fn render_metrics_row(run: &RunRecord) -> MetricsRow {
    let run_label = match run.run_id.char_indices().nth(RUN_ID_PREFIX) {
        Some((idx, _)) => format!("{}...", &run.run_id[..idx]),
        None => format!("{}...", run.run_id),
    };

    MetricsRow {
        run_label,
        timestamp_label: localize_timestamp(&run.timestamp),
        pass_rate_label: format!("{:.1}%", run.pass_rate),
        tier: PassRateTier::classify(run.pass_rate),
    }
}

/// The three headline cards above the history table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSummary {
    pub pass_rate: String,
    pub latency: String,
    pub total_runs: String,
}

pub fn render_metrics_summary(snapshot: &MetricsSnapshot) -> MetricsSummary {
    MetricsSummary {
        pass_rate: format!("{}%", snapshot.pass_rate_24h),
        latency: format!("{}s", snapshot.avg_latency_24h),
        total_runs: snapshot.total_runs.to_string(),
    }
}
