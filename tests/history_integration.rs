//! Integration tests for loading history and the sidebar.

mod common;

use common::{gateway, mount_get, store};
use logpilot::api::Role;
use logpilot::history::{HistoryLoader, WELCOME_HTML};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_empty_history_shows_welcome_and_empty_sidebar() {
    let server = MockServer::start().await;
    mount_get(&server, "/history", json!([])).await;

    let ui = store();
    let loader = HistoryLoader::new(gateway(&server), ui.clone());

    assert_eq!(loader.load().await.unwrap(), 0);

    let messages = ui.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, Role::Ai);
    assert_eq!(messages[0].body_html, WELCOME_HTML);
    assert!(ui.sidebar().is_empty());
}

#[tokio::test]
async fn test_history_renders_in_order_and_indexes_user_queries() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/history",
        json!([
            { "role": "user", "content": "How many 5xx responses did the gateway return yesterday?" },
            { "role": "assistant", "content": "There were **42**." },
            { "role": "user", "content": "and today?" },
            { "role": "ai", "content": "7 so far." }
        ]),
    )
    .await;

    let ui = store();
    let loader = HistoryLoader::new(gateway(&server), ui.clone());
    loader.load().await.unwrap();

    let roles: Vec<_> = ui.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Ai, Role::User, Role::Ai]);
    assert!(ui.messages()[1].body_html.contains("<strong>42</strong>"));

    let sidebar = ui.sidebar();
    assert_eq!(sidebar.len(), 2);
    assert_eq!(sidebar[0].label, "How many 5xx responses did the...");
    assert_eq!(sidebar[1].label, "and today?");

    assert_eq!(loader.select(0).as_deref(), Some(sidebar[0].query.as_str()));
    let composer = ui.composer();
    assert_eq!(composer.text, sidebar[0].query);
    assert!(composer.focused);
    // Selecting does not submit anything.
    assert_eq!(ui.message_count(), 4);
}

#[tokio::test]
async fn test_history_failure_keeps_previous_conversation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let ui = store();
    let loader = HistoryLoader::new(gateway(&server), ui.clone());

    assert!(loader.load().await.is_err());
    assert_eq!(ui.message_count(), 0);
    assert!(ui.sidebar().is_empty());
}
