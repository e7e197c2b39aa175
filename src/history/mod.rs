//! One-shot load of the prior conversation.
//!
//! Fills the message list from `/history` and rebuilds the sidebar index of
//! past user queries. Selecting a sidebar entry copies the query back into
//! the composer; it is never resubmitted automatically.

use crate::api::{ChatMessage, NetworkError, PilotApi, Role};
use crate::render::{markdown_to_html, render_message, truncate_with_ellipsis, MessageNode};
use crate::ui::{SidebarEntry, UiStore};
use std::sync::Arc;

/// Characters of a query shown in the sidebar before it is cut.
pub const SIDEBAR_LABEL_CHARS: usize = 30;

/// Greeting shown when the backend has no history.
pub const WELCOME_HTML: &str =
    "<p>Hello! I'm LogPilot. I can help you query your logs using natural language. 🚀</p>";

/// Sidebar label for a query: the first 30 characters, plus `...` if longer.
pub fn sidebar_label(query: &str) -> String {
    truncate_with_ellipsis(query, SIDEBAR_LABEL_CHARS)
}

/// Sidebar entries for the user-role messages of `history`, in order.
pub fn build_sidebar(history: &[ChatMessage]) -> Vec<SidebarEntry> {
    history
        .iter()
        .filter(|m| m.role == Role::User)
        .map(|m| SidebarEntry {
            label: sidebar_label(&m.content),
            query: m.content.clone(),
        })
        .collect()
}

/// Rendered message list for `history`, or the welcome message if it is empty.
pub fn build_conversation(history: &[ChatMessage]) -> Vec<MessageNode> {
    if history.is_empty() {
        return vec![render_message(Role::Ai, WELCOME_HTML)];
    }
    history
        .iter()
        .map(|m| render_message(m.role, markdown_to_html(&m.content)))
        .collect()
}

pub struct HistoryLoader {
    api: Arc<dyn PilotApi>,
    ui: Arc<UiStore>,
}

impl HistoryLoader {
    pub fn new(api: Arc<dyn PilotApi>, ui: Arc<UiStore>) -> Self {
        Self { api, ui }
    }

    /// Fetch history and replace the conversation and sidebar.
    ///
    /// On failure both regions are left as they were. Returns the number of
    /// history entries loaded.
    pub async fn load(&self) -> Result<usize, NetworkError> {
        let history = match self.api.get_history().await {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load history");
                return Err(e);
            }
        };

        self.ui.replace_messages(build_conversation(&history));
        self.ui.set_sidebar(build_sidebar(&history));

        tracing::info!(entries = history.len(), "Conversation history loaded");
        Ok(history.len())
    }

    /// Copy the `index`-th sidebar query into the composer and focus it.
    ///
    /// Returns the query, or `None` if there is no such entry.
    pub fn select(&self, index: usize) -> Option<String> {
        let entry = self.ui.sidebar().into_iter().nth(index)?;
        self.ui.fill_composer(entry.query.clone());
        Some(entry.query)
    }
}
