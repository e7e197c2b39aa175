//! Chat message and query trace rendering.

use super::{escape_html, markdown::markdown_to_html};
use crate::api::{QueryResponse, Role};

/// A rendered chat message, ready to be appended to the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageNode {
    pub role: Role,
    /// Inner body markup, already sanitized.
    pub body_html: String,
}

impl MessageNode {
    /// Full message markup including the avatar.
    pub fn html(&self) -> String {
        format!(
            "<div class=\"message {role}\"><div class=\"avatar\">{avatar}</div><div class=\"content\">{body}</div></div>",
            role = self.role.as_str(),
            avatar = self.role.avatar(),
            body = self.body_html,
        )
    }
}

/// Wrap an already-sanitized body with the role's avatar.
pub fn render_message(role: Role, body_html: impl Into<String>) -> MessageNode {
    MessageNode {
        role,
        body_html: body_html.into(),
    }
}

/// Body for a query the user just typed: shown verbatim, not as markdown.
pub fn render_user_query(text: &str) -> String {
    format!("<p>{}</p>", escape_html(text))
}

/// Body for an AI answer: the answer as markdown, then the trace block.
pub fn render_ai_answer(response: &QueryResponse) -> String {
    let mut html = markdown_to_html(&response.answer);
    html.push_str(&render_query_trace(response));
    html
}

/// Collapsible panels showing the generated SQL and the retrieved context.
///
/// Returns an empty string when the response carries neither. Both panels
/// are `<details>` elements without `open`, so they start collapsed.
pub fn render_query_trace(response: &QueryResponse) -> String {
    if !response.has_trace() {
        return String::new();
    }

    let mut html = String::from("<div class=\"references\">");

    if let Some(sql) = response.sql() {
        html.push_str("<details class=\"trace trace-sql\">");
        html.push_str("<summary>🔍 View SQL Query &amp; Results</summary>");
        html.push_str("<div class=\"trace-body\">");
        html.push_str("<div class=\"trace-label\">Generated SQL:</div>");
        html.push_str(&code_block("sql", sql));
        if let Some(result) = response.sql_result() {
            html.push_str("<div class=\"trace-label\">Execution Result:</div>");
            html.push_str(&code_block("json", result));
        }
        html.push_str("</div></details>");
    }

    if let Some(context) = response.context() {
        html.push_str("<details class=\"trace trace-context\">");
        html.push_str("<summary>📄 View Retrieved Context</summary>");
        html.push_str("<div class=\"trace-body\">");
        html.push_str(&code_block("text", context));
        html.push_str("</div></details>");
    }

    html.push_str("</div>");
    html
}

fn code_block(language: &str, text: &str) -> String {
    format!(
        "<pre><code class=\"language-{}\">{}</code></pre>",
        language,
        escape_html(text)
    )
}
