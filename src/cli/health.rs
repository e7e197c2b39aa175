//! Health command implementation

use crate::api::PilotApi;
use crate::cli::output::{format_json, format_readiness};
use crate::cli::OutputArgs;
use crate::health::Readiness;

/// Handle `logpilot health`
pub async fn handle_health(
    args: &OutputArgs,
    api: &dyn PilotApi,
) -> Result<String, Box<dyn std::error::Error>> {
    let status = api.get_health().await?;

    if args.json {
        Ok(format_json("health", &status)?)
    } else {
        Ok(format_readiness(&Readiness::from(&status)))
    }
}
