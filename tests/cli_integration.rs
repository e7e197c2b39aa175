//! CLI integration tests
//!
//! End-to-end tests for the `logpilot` binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get the logpilot binary for testing, isolated from the caller's environment
fn logpilot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("logpilot").unwrap();
    cmd.env_remove("LOGPILOT_API_URL")
        .env_remove("LOGPILOT_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_version_output() {
    logpilot_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("logpilot"));
}

#[test]
fn test_help_shows_all_commands() {
    logpilot_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("console"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("health"))
        .stdout(predicate::str::contains("history"))
        .stdout(predicate::str::contains("metrics"))
        .stdout(predicate::str::contains("alerts"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_alerts_help() {
    logpilot_cmd()
        .args(["alerts", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("dismiss"));
}

#[test]
fn test_config_init_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("logpilot.toml");

    logpilot_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[api]"));
}

#[test]
fn test_config_init_no_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("logpilot.toml");

    std::fs::write(&config_path, "existing content").unwrap();

    logpilot_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exists"));
}

#[test]
fn test_invalid_api_url_rejected() {
    logpilot_cmd()
        .args(["--api-url", "localhost:8000", "health"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("api.base_url"));
}

#[test]
fn test_invalid_command() {
    logpilot_cmd()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_completions_bash() {
    logpilot_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_health_json_against_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "llm": { "status": "downloading", "model": "llama3:8b" }
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    let assert = tokio::task::spawn_blocking(move || {
        logpilot_cmd()
            .args(["--api-url", &uri, "health", "--json"])
            .assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("downloading"))
        .stdout(predicate::str::contains("llama3:8b"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ask_prints_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "Checkout logged 40 errors.",
            "sql": "SELECT count(*) FROM logs WHERE service = 'checkout'"
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    let assert = tokio::task::spawn_blocking(move || {
        logpilot_cmd()
            .args(["--api-url", &uri, "ask", "errors", "in", "checkout"])
            .assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("Checkout logged 40 errors."))
        .stdout(predicate::str::contains("Generated SQL:"));
}

#[test]
fn test_unreachable_backend_fails() {
    logpilot_cmd()
        .args(["--api-url", "http://127.0.0.1:9", "alerts", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[cfg(unix)]
#[tokio::test(flavor = "multi_thread")]
async fn test_console_exits_on_sigint_while_query_pending() {
    use std::io::Write;
    use std::process::{Command as StdCommand, Stdio};
    use std::time::{Duration, Instant};

    let server = MockServer::start().await;
    for (route, body) in [
        ("/health", json!({ "llm": { "status": "ready", "model": "llama3" } })),
        ("/history", json!([])),
        ("/alerts", json!([])),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
    }
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "answer": "late" }))
                .set_delay(Duration::from_secs(8)),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    let exited_in = tokio::task::spawn_blocking(move || {
        let mut child = StdCommand::new(env!("CARGO_BIN_EXE_logpilot"))
            .args(["--api-url", &uri, "console"])
            .env_remove("LOGPILOT_API_URL")
            .env_remove("LOGPILOT_LOG_LEVEL")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .unwrap();

        std::thread::sleep(Duration::from_millis(1000));
        let mut stdin = child.stdin.take().unwrap();
        writeln!(stdin, "errors in checkout").unwrap();
        stdin.flush().unwrap();
        std::thread::sleep(Duration::from_millis(500));

        let interrupted = Instant::now();
        StdCommand::new("kill")
            .args(["-INT", &child.id().to_string()])
            .status()
            .unwrap();

        let deadline = Duration::from_secs(5);
        let status = loop {
            if let Some(status) = child.try_wait().unwrap() {
                break Some(status);
            }
            if interrupted.elapsed() > deadline {
                let _ = child.kill();
                let _ = child.wait();
                break None;
            }
            std::thread::sleep(Duration::from_millis(50));
        };
        drop(stdin);
        status.map(|status| (status, interrupted.elapsed()))
    })
    .await
    .unwrap();

    let (status, elapsed) = exited_in.expect("console kept running after SIGINT");
    assert!(status.success());
    assert!(elapsed < Duration::from_secs(5));
}
