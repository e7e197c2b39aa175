//! Region types making up the UI state.

use crate::render::{
    escape_html, AlertCard, MessageNode, MetricsRow, MetricsSummary, NO_ALERTS_HTML,
};

/// Placeholder while the composer accepts input.
pub const READY_PLACEHOLDER: &str = "Ask about your logs...";

/// Placeholder while the backend model is still downloading.
pub const BLOCKED_PLACEHOLDER: &str = "Waiting for model download...";

/// Top-level panels; exactly one is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Chat,
    Performance,
    Alerts,
}

impl View {
    pub const ALL: [View; 3] = [View::Chat, View::Performance, View::Alerts];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Chat => "chat",
            View::Performance => "performance",
            View::Alerts => "alerts",
        }
    }
}

impl std::str::FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chat" => Ok(View::Chat),
            "performance" | "perf" | "metrics" => Ok(View::Performance),
            "alerts" => Ok(View::Alerts),
            _ => Err(format!("Unknown view: {}", s)),
        }
    }
}

/// Independently owned areas of the UI, with the components allowed to write each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Message list. Chat controller and history loader.
    Conversation,
    /// Typing indicator. Chat controller.
    Typing,
    /// Input text and focus. Chat controller and sidebar selection.
    Composer,
    /// Input/submit enabled state and placeholder. Health poller only.
    InputGate,
    /// Model-download banner. Health poller only.
    Banner,
    /// History sidebar. History loader.
    Sidebar,
    /// Performance cards and table. Metrics loader.
    Metrics,
    /// Alert count badge. Alerts controller.
    AlertBadge,
    /// Alert cards. Alerts controller.
    AlertList,
    /// Active view and nav highlight. View switcher.
    Navigation,
}

/// Text in the query input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposerState {
    pub text: String,
    pub focused: bool,
}

/// Whether the input and submit control accept interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputGate {
    pub disabled: bool,
    pub placeholder: String,
}

impl InputGate {
    pub fn ready() -> Self {
        Self {
            disabled: false,
            placeholder: READY_PLACEHOLDER.to_string(),
        }
    }

    pub fn blocked() -> Self {
        Self {
            disabled: true,
            placeholder: BLOCKED_PLACEHOLDER.to_string(),
        }
    }
}

impl Default for InputGate {
    fn default() -> Self {
        Self::ready()
    }
}

/// A prior user query listed in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    /// Possibly truncated label.
    pub label: String,
    /// Full query text, shown as tooltip and copied on selection.
    pub query: String,
}

impl SidebarEntry {
    pub fn html(&self) -> String {
        format!(
            "<li title=\"{}\">{}</li>",
            escape_html(&self.query),
            escape_html(&self.label)
        )
    }
}

/// Contents of the Performance view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsPanel {
    pub summary: Option<MetricsSummary>,
    pub rows: Vec<MetricsRow>,
}

/// Active alert count; hidden when zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertBadge {
    pub count: usize,
    pub visible: bool,
}

/// Cards in the Alerts view. `rendered` stays false until the list is first drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertListState {
    pub rendered: bool,
    pub cards: Vec<AlertCard>,
}

/// Point-in-time copy of every region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub messages: Vec<MessageNode>,
    pub typing: bool,
    pub composer: ComposerState,
    pub input_gate: InputGate,
    pub banner: Option<String>,
    pub sidebar: Vec<SidebarEntry>,
    pub metrics: MetricsPanel,
    pub alert_badge: AlertBadge,
    pub alert_list: AlertListState,
    pub active_view: View,
}

impl UiState {
    pub fn conversation_html(&self) -> String {
        self.messages.iter().map(MessageNode::html).collect()
    }

    pub fn sidebar_html(&self) -> String {
        let items: String = self.sidebar.iter().map(SidebarEntry::html).collect();
        format!("<ul class=\"history-list\">{}</ul>", items)
    }

    pub fn banner_html(&self) -> Option<String> {
        self.banner
            .as_ref()
            .map(|text| format!("<div id=\"status-banner\">⚠️ {}</div>", escape_html(text)))
    }

    pub fn metrics_table_html(&self) -> String {
        self.metrics.rows.iter().map(MetricsRow::html).collect()
    }

    pub fn alert_list_html(&self) -> String {
        if !self.alert_list.rendered {
            String::new()
        } else if self.alert_list.cards.is_empty() {
            NO_ALERTS_HTML.to_string()
        } else {
            self.alert_list.cards.iter().map(AlertCard::html).collect()
        }
    }
}
