//! Metrics command implementation

use crate::api::PilotApi;
use crate::cli::output::{format_json, format_metrics};
use crate::cli::OutputArgs;
use crate::render::{render_metrics_row, render_metrics_summary};

/// Handle `logpilot metrics`
pub async fn handle_metrics(
    args: &OutputArgs,
    api: &dyn PilotApi,
) -> Result<String, Box<dyn std::error::Error>> {
    let snapshot = api.get_metrics().await?;

    if args.json {
        return Ok(format_json("metrics", &snapshot)?);
    }

    let rows: Vec<_> = snapshot.history.iter().map(render_metrics_row).collect();
    Ok(format_metrics(&render_metrics_summary(&snapshot), &rows))
}
