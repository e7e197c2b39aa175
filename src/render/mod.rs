//! Rendering layer: structured data in, HTML fragments out.
//!
//! Nothing in here touches the network, timers or the UI store. Every piece
//! of server- or user-provided text is escaped before it is interpolated;
//! markdown goes through [`markdown::markdown_to_html`], which drops raw HTML.

pub mod alerts;
pub mod markdown;
pub mod message;
pub mod performance;

pub use alerts::{render_alert_card, AlertCard, NO_ALERTS_HTML};
pub use markdown::markdown_to_html;
pub use message::{
    render_ai_answer, render_message, render_query_trace, render_user_query, MessageNode,
};
pub use performance::{
    render_metrics_row, render_metrics_summary, MetricsRow, MetricsSummary, PassRateTier,
};

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render an ISO-8601 timestamp in the local timezone.
///
/// Timestamps without an offset are taken as UTC. Anything unparseable is
/// returned unchanged.
pub fn localize_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|utc| {
            utc.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| raw.to_string())
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
