//! History command implementation

use crate::api::PilotApi;
use crate::cli::output::{format_history_table, format_json};
use crate::cli::OutputArgs;

/// Handle `logpilot history`
pub async fn handle_history(
    args: &OutputArgs,
    api: &dyn PilotApi,
) -> Result<String, Box<dyn std::error::Error>> {
    let history = api.get_history().await?;

    if args.json {
        Ok(format_json("history", &history)?)
    } else {
        Ok(format_history_table(&history))
    }
}
