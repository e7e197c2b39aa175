//! Ask command implementation

use crate::api::PilotApi;
use crate::cli::output::{format_answer, format_json};
use crate::cli::AskArgs;

/// Handle `logpilot ask`
pub async fn handle_ask(
    args: &AskArgs,
    api: &dyn PilotApi,
) -> Result<String, Box<dyn std::error::Error>> {
    let text = args.query_text();
    let query = text.trim();
    if query.is_empty() {
        return Err("Query cannot be empty".into());
    }

    tracing::debug!(query_chars = query.chars().count(), "Submitting one-shot query");
    let response = api.submit_query(query).await?;

    if args.json {
        Ok(format_json("response", &response)?)
    } else {
        Ok(format_answer(&response))
    }
}
