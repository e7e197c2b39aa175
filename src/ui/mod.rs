//! UI-state store shared by the controllers.
//!
//! The store is the only place UI state lives. Each [`Region`] has its own
//! update method and its own owners (documented on the variant); controllers
//! never write a region they do not own. Every effective change is announced
//! on a broadcast channel so a presentation layer can redraw just that region.

mod state;

pub use state::{
    AlertBadge, AlertListState, ComposerState, InputGate, MetricsPanel, Region, SidebarEntry,
    UiState, View, BLOCKED_PLACEHOLDER, READY_PLACEHOLDER,
};

use crate::render::{AlertCard, MessageNode, MetricsRow, MetricsSummary};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::broadcast;

/// Buffered change notifications before slow subscribers start lagging.
const CHANGE_CHANNEL_CAPACITY: usize = 256;

/// Shared, region-partitioned UI state.
pub struct UiStore {
    state: RwLock<UiState>,
    changes: broadcast::Sender<Region>,
}

impl UiStore {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            state: RwLock::new(UiState::default()),
            changes,
        }
    }

    /// Receive the region of every subsequent change.
    pub fn subscribe(&self) -> broadcast::Receiver<Region> {
        self.changes.subscribe()
    }

    /// Copy of the whole UI.
    pub fn snapshot(&self) -> UiState {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, UiState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, UiState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `f` to the state and announce `region` if anything changed.
    fn update<F>(&self, region: Region, f: F)
    where
        F: FnOnce(&mut UiState) -> bool,
    {
        let changed = {
            let mut state = self.write();
            f(&mut state)
        };
        if changed {
            // No subscribers is fine.
            let _ = self.changes.send(region);
        }
    }

    // ------------------------------------------------------------------
    // Conversation
    // ------------------------------------------------------------------

    pub fn append_message(&self, message: MessageNode) {
        self.update(Region::Conversation, |s| {
            s.messages.push(message);
            true
        });
    }

    /// Replace the whole message list.
    pub fn replace_messages(&self, messages: Vec<MessageNode>) {
        self.update(Region::Conversation, |s| {
            s.messages = messages;
            true
        });
    }

    pub fn messages(&self) -> Vec<MessageNode> {
        self.read().messages.clone()
    }

    pub fn message_count(&self) -> usize {
        self.read().messages.len()
    }

    // ------------------------------------------------------------------
    // Typing indicator
    // ------------------------------------------------------------------

    pub fn set_typing(&self, typing: bool) {
        self.update(Region::Typing, |s| {
            std::mem::replace(&mut s.typing, typing) != typing
        });
    }

    pub fn is_typing(&self) -> bool {
        self.read().typing
    }

    // ------------------------------------------------------------------
    // Composer
    // ------------------------------------------------------------------

    /// Put `text` in the input and focus it.
    pub fn fill_composer(&self, text: impl Into<String>) {
        let composer = ComposerState {
            text: text.into(),
            focused: true,
        };
        self.update(Region::Composer, |s| {
            std::mem::replace(&mut s.composer, composer.clone()) != composer
        });
    }

    /// Empty the input, leaving focus where it is.
    pub fn clear_composer(&self) {
        self.update(Region::Composer, |s| {
            !std::mem::take(&mut s.composer.text).is_empty()
        });
    }

    pub fn composer(&self) -> ComposerState {
        self.read().composer.clone()
    }

    // ------------------------------------------------------------------
    // Input gate and banner (health poller only)
    // ------------------------------------------------------------------

    pub fn set_input_gate(&self, gate: InputGate) {
        self.update(Region::InputGate, |s| {
            std::mem::replace(&mut s.input_gate, gate.clone()) != gate
        });
    }

    pub fn input_gate(&self) -> InputGate {
        self.read().input_gate.clone()
    }

    pub fn set_banner(&self, banner: Option<String>) {
        self.update(Region::Banner, |s| {
            std::mem::replace(&mut s.banner, banner.clone()) != banner
        });
    }

    pub fn banner(&self) -> Option<String> {
        self.read().banner.clone()
    }

    // ------------------------------------------------------------------
    // Sidebar
    // ------------------------------------------------------------------

    pub fn set_sidebar(&self, entries: Vec<SidebarEntry>) {
        self.update(Region::Sidebar, |s| {
            s.sidebar = entries;
            true
        });
    }

    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        self.read().sidebar.clone()
    }

    // ------------------------------------------------------------------
    // Metrics
    // ------------------------------------------------------------------

    /// Replace the performance view wholesale.
    pub fn set_metrics(&self, summary: MetricsSummary, rows: Vec<MetricsRow>) {
        self.update(Region::Metrics, |s| {
            s.metrics = MetricsPanel {
                summary: Some(summary),
                rows,
            };
            true
        });
    }

    pub fn metrics(&self) -> MetricsPanel {
        self.read().metrics.clone()
    }

    // ------------------------------------------------------------------
    // Alerts
    // ------------------------------------------------------------------

    /// Show `count` on the badge; a zero count hides it.
    pub fn set_alert_badge(&self, count: usize) {
        let badge = AlertBadge {
            count,
            visible: count > 0,
        };
        self.update(Region::AlertBadge, |s| {
            std::mem::replace(&mut s.alert_badge, badge) != badge
        });
    }

    pub fn alert_badge(&self) -> AlertBadge {
        self.read().alert_badge
    }

    pub fn set_alert_list(&self, cards: Vec<AlertCard>) {
        let list = AlertListState {
            rendered: true,
            cards,
        };
        self.update(Region::AlertList, |s| {
            std::mem::replace(&mut s.alert_list, list.clone()) != list
        });
    }

    pub fn alert_list(&self) -> AlertListState {
        self.read().alert_list.clone()
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn set_active_view(&self, view: View) {
        self.update(Region::Navigation, |s| {
            std::mem::replace(&mut s.active_view, view) != view
        });
    }

    pub fn active_view(&self) -> View {
        self.read().active_view
    }
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}
