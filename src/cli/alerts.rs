//! Alerts command implementations

use crate::api::PilotApi;
use crate::cli::output::{format_alerts_table, format_json};
use crate::cli::{DismissArgs, OutputArgs};
use crate::render::render_alert_card;

/// Handle `logpilot alerts list`
pub async fn handle_alerts_list(
    args: &OutputArgs,
    api: &dyn PilotApi,
) -> Result<String, Box<dyn std::error::Error>> {
    let alerts = api.get_alerts().await?;

    if args.json {
        return Ok(format_json("alerts", &alerts)?);
    }

    let cards: Vec<_> = alerts.iter().map(render_alert_card).collect();
    Ok(format_alerts_table(&cards))
}

/// Handle `logpilot alerts dismiss`
pub async fn handle_alerts_dismiss(
    args: &DismissArgs,
    api: &dyn PilotApi,
) -> Result<String, Box<dyn std::error::Error>> {
    api.dismiss_alert(&args.id).await?;
    Ok(format!("✓ Alert dismissed: {}", args.id))
}
