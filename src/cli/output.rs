//! Output formatting helpers for CLI commands

use crate::api::{ChatMessage, QueryResponse};
use crate::health::Readiness;
use crate::render::{truncate_with_ellipsis, AlertCard, MetricsRow, MetricsSummary, PassRateTier};
use crate::ui::{SidebarEntry, View};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde::Serialize;
use serde_json::json;

/// Characters of a history message shown in the table.
const HISTORY_PREVIEW_CHARS: usize = 80;

/// Text shown when no alert is active.
pub const NO_ALERTS_TEXT: &str = "No active alerts. System healthy.";

fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Wrap `value` under `key` and pretty-print it.
pub fn format_json<T: Serialize>(key: &str, value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({ key: value }))
}

/// One-line readiness summary.
pub fn format_readiness(readiness: &Readiness) -> String {
    match readiness {
        Readiness::Ready => format!("Status: {}", "Ready".green()),
        Readiness::Blocked { model } => format!(
            "Status: {}\nModel: {}\n{}",
            "Downloading".yellow(),
            model,
            readiness.banner().unwrap_or_default()
        ),
    }
}

/// Answer text followed by whatever trace data came with it.
pub fn format_answer(response: &QueryResponse) -> String {
    let mut output = format!("{} {}\n", "🤖".bold(), response.answer);

    if let Some(sql) = response.sql() {
        output.push_str(&format!("\n{}\n{}\n", "Generated SQL:".cyan(), sql));
        if let Some(result) = response.sql_result() {
            output.push_str(&format!("\n{}\n{}\n", "Execution Result:".cyan(), result));
        }
    }
    if let Some(context) = response.context() {
        output.push_str(&format!("\n{}\n{}\n", "Retrieved Context:".cyan(), context));
    }

    output
}

/// Navigation bar with the active view highlighted.
pub fn format_navigation(active: View) -> String {
    View::ALL
        .iter()
        .map(|view| {
            if *view == active {
                format!("[{}]", view.as_str()).bold().to_string()
            } else {
                view.as_str().dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format conversation history as a table
pub fn format_history_table(history: &[ChatMessage]) -> String {
    let mut table = table(vec!["#", "Role", "Message"]);

    for (i, message) in history.iter().enumerate() {
        let preview = truncate_with_ellipsis(
            &message.content.replace('\n', " "),
            HISTORY_PREVIEW_CHARS,
        );
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{} {}", message.role.avatar(), message.role.as_str())),
            Cell::new(preview),
        ]);
    }

    table.to_string()
}

/// Numbered list of sidebar entries, as recalled with `/recall <n>`.
pub fn format_sidebar(entries: &[SidebarEntry]) -> String {
    if entries.is_empty() {
        return "No previous queries.".dimmed().to_string();
    }
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{:>3}. {}", i + 1, e.label))
        .collect::<Vec<_>>()
        .join("\n")
}

fn tier_colored(label: &str, tier: PassRateTier) -> String {
    match tier {
        PassRateTier::Success => label.green().to_string(),
        PassRateTier::Warning => label.yellow().to_string(),
        PassRateTier::Danger => label.red().to_string(),
    }
}

/// Format the summary cards and run history
pub fn format_metrics(summary: &MetricsSummary, rows: &[MetricsRow]) -> String {
    let mut output = format!(
        "Pass rate (24h): {}\nAvg latency (24h): {}\nTotal runs: {}\n",
        summary.pass_rate.bold(),
        summary.latency.bold(),
        summary.total_runs.bold()
    );

    let mut table = table(vec!["Run", "Timestamp", "Pass Rate"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.run_label),
            Cell::new(&row.timestamp_label),
            Cell::new(tier_colored(&row.pass_rate_label, row.tier)),
        ]);
    }
    output.push_str(&table.to_string());

    output
}

/// Format alert cards as a table
pub fn format_alerts_table(cards: &[AlertCard]) -> String {
    if cards.is_empty() {
        return NO_ALERTS_TEXT.green().to_string();
    }

    let mut table = table(vec!["ID", "Alert", "Message", "Analysis", "Time"]);
    for card in cards {
        table.add_row(vec![
            Cell::new(&card.dismiss_id),
            Cell::new(card.title.red().to_string()),
            Cell::new(&card.message),
            Cell::new(&card.analysis),
            Cell::new(&card.timestamp_label),
        ]);
    }

    table.to_string()
}
