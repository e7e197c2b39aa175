//! Chat controller: the submit-query lifecycle.
//!
//! A submission moves the controller from [`ChatState::Idle`] to
//! [`ChatState::AwaitingAnswer`] and back. The user message is appended
//! before the request goes out; exactly one AI message (the answer or an
//! error notice) is appended when it resolves. A second submission while
//! one is in flight is rejected, so answers always appear in order.

use crate::api::{NetworkError, PilotApi, QueryResponse, Role};
use crate::render::{render_ai_answer, render_message, render_user_query};
use crate::ui::UiStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Plain-text notice for a failed query request.
pub const CONNECTION_ERROR_TEXT: &str = "Error: Could not connect to Pilot. Is the API running?";

/// Shown in place of an answer when the query request fails.
pub const CONNECTION_ERROR_HTML: &str =
    "<p class=\"error\">Error: Could not connect to Pilot. Is the API running?</p>";

/// Shown after the conversation is cleared.
pub const CHAT_CLEARED_HTML: &str = "<p>Chat cleared. How can I help you now?</p>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AwaitingAnswer,
}

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing rendered, nothing sent.
    Empty,
    /// The input is gated off while the backend model loads.
    InputDisabled,
    /// Another query is still awaiting its answer.
    Busy,
    /// The answer was rendered.
    Answered(QueryResponse),
    /// The request failed and the error notice was rendered.
    Failed(NetworkError),
}

pub struct ChatController {
    api: Arc<dyn PilotApi>,
    ui: Arc<UiStore>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag however the submission ends, including cancellation.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ChatController {
    pub fn new(api: Arc<dyn PilotApi>, ui: Arc<UiStore>) -> Self {
        Self {
            api,
            ui,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> ChatState {
        if self.in_flight.load(Ordering::Acquire) {
            ChatState::AwaitingAnswer
        } else {
            ChatState::Idle
        }
    }

    /// Submit `input` as a query.
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let query = input.trim();
        if query.is_empty() {
            return SubmitOutcome::Empty;
        }

        if self.ui.input_gate().disabled {
            tracing::debug!("Submission ignored while input is disabled");
            return SubmitOutcome::InputDisabled;
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Submission ignored while awaiting previous answer");
            return SubmitOutcome::Busy;
        }
        let _guard = InFlightGuard(&self.in_flight);

        self.ui
            .append_message(render_message(Role::User, render_user_query(query)));
        self.ui.clear_composer();
        self.ui.set_typing(true);

        let started = Instant::now();
        let result = self.api.submit_query(query).await;
        metrics::histogram!("logpilot_query_duration_seconds")
            .record(started.elapsed().as_secs_f64());

        self.ui.set_typing(false);

        match result {
            Ok(response) => {
                tracing::debug!(
                    has_sql = response.sql().is_some(),
                    has_context = response.context().is_some(),
                    "Query answered"
                );
                self.ui
                    .append_message(render_message(Role::Ai, render_ai_answer(&response)));
                SubmitOutcome::Answered(response)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Query request failed");
                self.ui
                    .append_message(render_message(Role::Ai, CONNECTION_ERROR_HTML));
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Submit whatever is currently in the composer.
    pub async fn submit_composer(&self) -> SubmitOutcome {
        let text = self.ui.composer().text;
        self.submit(&text).await
    }

    /// Wipe the conversation and leave a single notice.
    pub fn clear(&self) {
        self.ui
            .replace_messages(vec![render_message(Role::Ai, CHAT_CLEARED_HTML)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Alert, ChatMessage, HealthStatus, MetricsSnapshot};
    use crate::ui::InputGate;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    /// Counts calls and answers from a fixed result.
    struct FixedApi {
        calls: AtomicUsize,
        result: Result<QueryResponse, NetworkError>,
    }

    #[async_trait]
    impl PilotApi for FixedApi {
        async fn submit_query(&self, _text: &str) -> Result<QueryResponse, NetworkError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
        async fn get_health(&self) -> Result<HealthStatus, NetworkError> {
            unreachable!()
        }
        async fn get_history(&self) -> Result<Vec<ChatMessage>, NetworkError> {
            unreachable!()
        }
        async fn get_metrics(&self) -> Result<MetricsSnapshot, NetworkError> {
            unreachable!()
        }
        async fn get_alerts(&self) -> Result<Vec<Alert>, NetworkError> {
            unreachable!()
        }
        async fn dismiss_alert(&self, _id: &str) -> Result<(), NetworkError> {
            unreachable!()
        }
    }

    fn controller(
        result: Result<QueryResponse, NetworkError>,
    ) -> (ChatController, Arc<FixedApi>, Arc<UiStore>) {
        let api = Arc::new(FixedApi {
            calls: AtomicUsize::new(0),
            result,
        });
        let ui = Arc::new(UiStore::new());
        let chat = ChatController::new(api.clone(), ui.clone());
        (chat, api, ui)
    }

    fn answer(text: &str) -> QueryResponse {
        QueryResponse {
            answer: text.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_empty_input_is_noop() {
        let (chat, api, ui) = controller(Ok(answer("x")));
        for input in ["", "   ", "\n\t "] {
            assert_eq!(chat.submit(input).await, SubmitOutcome::Empty);
        }
        assert_eq!(ui.message_count(), 0);
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_success_appends_two_messages() {
        let (chat, api, ui) = controller(Ok(answer("All **good**")));
        ui.fill_composer("  how many errors?  ");

        let outcome = chat.submit_composer().await;

        assert!(matches!(outcome, SubmitOutcome::Answered(_)));
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
        let messages = ui.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].body_html, "<p>how many errors?</p>");
        assert_eq!(messages[1].role, Role::Ai);
        assert!(messages[1].body_html.contains("<strong>good</strong>"));
        assert_eq!(ui.composer().text, "");
        assert!(!ui.is_typing());
        assert_eq!(chat.state(), ChatState::Idle);
    }

    #[tokio::test]
    async fn test_failure_appends_error_message() {
        let (chat, _api, ui) = controller(Err(NetworkError::Transport("refused".to_string())));
        ui.fill_composer("status?");

        let outcome = chat.submit_composer().await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        let messages = ui.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, Role::Ai);
        assert_eq!(messages[1].body_html, CONNECTION_ERROR_HTML);
        assert!(messages[1].body_html.contains(CONNECTION_ERROR_TEXT));
        // The text is not restored to the input.
        assert_eq!(ui.composer().text, "");
        assert!(!ui.is_typing());
    }

    #[tokio::test]
    async fn test_disabled_input_rejects_submission() {
        let (chat, api, ui) = controller(Ok(answer("x")));
        ui.set_input_gate(InputGate::blocked());

        assert_eq!(chat.submit("hello").await, SubmitOutcome::InputDisabled);
        assert_eq!(ui.message_count(), 0);
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_busy_while_in_flight() {
        let (chat, api, ui) = controller(Ok(answer("x")));
        chat.in_flight.store(true, Ordering::SeqCst);

        assert_eq!(chat.state(), ChatState::AwaitingAnswer);
        assert_eq!(chat.submit("hello").await, SubmitOutcome::Busy);
        assert_eq!(ui.message_count(), 0);
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_clear_leaves_single_notice() {
        let (chat, _api, ui) = controller(Ok(answer("x")));
        ui.append_message(render_message(Role::User, "<p>a</p>"));
        ui.append_message(render_message(Role::Ai, "<p>b</p>"));

        chat.clear();

        let messages = ui.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].body_html, CHAT_CLEARED_HTML);
    }
}
