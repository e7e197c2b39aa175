//! Interactive terminal console
//!
//! Reads one line at a time from stdin. Plain text is submitted as a query;
//! lines starting with `/` are console commands. Banner and alert badge
//! changes are printed as they happen, whatever the user is doing.

use crate::chat::{SubmitOutcome, CONNECTION_ERROR_TEXT};
use crate::cli::output::{
    format_alerts_table, format_answer, format_metrics, format_navigation, format_sidebar,
};
use crate::config::ConsoleConfig;
use crate::console::Console;
use crate::ui::{Region, UiStore, View, BLOCKED_PLACEHOLDER};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio_util::sync::CancellationToken;

const HELP_TEXT: &str = "\
Type a question to query your logs, or one of:
  /chat              switch to the chat view
  /performance       show evaluation metrics
  /alerts            show active alerts
  /dismiss <id>      dismiss an alert
  /history           list previous queries
  /recall <n>        put previous query <n> in the input
  /send              submit the recalled query
  /clear             clear the conversation
  /help              show this help
  /quit              leave the console";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Empty,
    Query(String),
    Switch(View),
    Dismiss(String),
    History,
    Recall(usize),
    Send,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ConsoleCommand::Empty;
        }
        let Some(rest) = line.strip_prefix('/') else {
            return ConsoleCommand::Query(line.to_string());
        };

        let mut parts = rest.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim).unwrap_or_default();

        if let Ok(view) = name.parse::<View>() {
            return ConsoleCommand::Switch(view);
        }

        match name {
            "dismiss" if !arg.is_empty() => ConsoleCommand::Dismiss(arg.to_string()),
            "recall" => match arg.parse::<usize>() {
                Ok(n) if n > 0 => ConsoleCommand::Recall(n),
                _ => ConsoleCommand::Unknown(line.to_string()),
            },
            "history" => ConsoleCommand::History,
            "send" => ConsoleCommand::Send,
            "clear" => ConsoleCommand::Clear,
            "help" | "?" => ConsoleCommand::Help,
            "quit" | "exit" | "q" => ConsoleCommand::Quit,
            _ => ConsoleCommand::Unknown(line.to_string()),
        }
    }
}

/// Terminal text for a chat submission.
pub fn format_outcome(outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Empty => String::new(),
        SubmitOutcome::InputDisabled => BLOCKED_PLACEHOLDER.yellow().to_string(),
        SubmitOutcome::Busy => "Still waiting for the previous answer."
            .yellow()
            .to_string(),
        SubmitOutcome::Answered(response) => format_answer(response),
        SubmitOutcome::Failed(_) => CONNECTION_ERROR_TEXT.red().to_string(),
    }
}

/// What the console shows for `view` right after switching to it.
fn format_view(ui: &UiStore, view: View) -> String {
    let body = match view {
        View::Chat => format!("{} messages in this conversation", ui.message_count()),
        View::Performance => match ui.metrics().summary {
            Some(summary) => format_metrics(&summary, &ui.metrics().rows),
            None => "Metrics unavailable.".red().to_string(),
        },
        View::Alerts => {
            let list = ui.alert_list();
            if list.rendered {
                format_alerts_table(&list.cards)
            } else {
                "Alerts unavailable.".red().to_string()
            }
        }
    };
    format!("{}\n{}", format_navigation(view), body)
}

/// Run one command against the console and return what to print.
pub async fn execute(console: &Console, command: ConsoleCommand) -> String {
    let ui = console.ui();
    match command {
        ConsoleCommand::Empty | ConsoleCommand::Quit => String::new(),
        ConsoleCommand::Query(text) => {
            if ui.active_view() != View::Chat {
                console.views().switch(View::Chat).await;
            }
            format_outcome(&console.chat().submit(&text).await)
        }
        ConsoleCommand::Send => format_outcome(&console.chat().submit_composer().await),
        ConsoleCommand::Switch(view) => {
            console.views().switch(view).await;
            format_view(ui, view)
        }
        ConsoleCommand::Dismiss(id) => match console.alerts().dismiss(&id).await {
            Ok(()) => {
                let mut output = format!("✓ Alert dismissed: {}", id);
                if ui.active_view() == View::Alerts {
                    output.push('\n');
                    output.push_str(&format_alerts_table(&ui.alert_list().cards));
                }
                output
            }
            Err(e) => format!("Failed to dismiss alert {}: {}", id, e)
                .red()
                .to_string(),
        },
        ConsoleCommand::History => format_sidebar(&ui.sidebar()),
        ConsoleCommand::Recall(n) => match console.history().select(n - 1) {
            Some(query) => format!("Recalled: {}\nType /send to submit it.", query),
            None => format!("No previous query #{}", n),
        },
        ConsoleCommand::Clear => {
            console.chat().clear();
            "Chat cleared.".to_string()
        }
        ConsoleCommand::Help => HELP_TEXT.to_string(),
        ConsoleCommand::Unknown(line) => {
            format!("Unknown command: {}. Type /help for commands.", line)
        }
    }
}

/// Forward stdin lines from a plain thread so a pending read never holds up shutdown.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Print banner and badge changes until cancelled.
async fn watch_regions(
    ui: Arc<UiStore>,
    mut changes: broadcast::Receiver<Region>,
    cancel_token: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => break,
            change = changes.recv() => match change {
                Ok(Region::Banner) => match ui.banner() {
                    Some(text) => println!("\n⚠️  {}", text.yellow()),
                    None => println!("\n{}", "✓ Model ready".green()),
                },
                Ok(Region::AlertBadge) => {
                    let badge = ui.alert_badge();
                    if badge.visible {
                        println!("\n🔔 {} active alert(s), /alerts to view", badge.count);
                    } else {
                        println!("\n{}", "No active alerts".dimmed());
                    }
                }
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Region watcher lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }
}

fn prompt() {
    print!("{} ", "›".cyan());
    let _ = std::io::stdout().flush();
}

/// Cancel `cancel_token` on SIGINT or SIGTERM.
async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }

    cancel_token.cancel();
}

/// Handle `logpilot console`
pub async fn run_console(config: &ConsoleConfig) -> Result<(), Box<dyn std::error::Error>> {
    let console = Console::new(config)?;
    let ui = Arc::clone(console.ui());

    let cancel_token = CancellationToken::new();
    let signals = tokio::spawn(shutdown_signal(cancel_token.clone()));

    println!(
        "{} connected to {}",
        "LogPilot console".bold(),
        config.api.base_url
    );
    println!("Type /help for commands.\n");

    let watcher = tokio::spawn(watch_regions(
        Arc::clone(&ui),
        ui.subscribe(),
        cancel_token.clone(),
    ));

    tokio::select! {
        _ = cancel_token.cancelled() => {}
        _ = console.start() => {
            println!(
                "{} ({} previous queries, /history to list)",
                format_navigation(ui.active_view()),
                ui.sidebar().len()
            );
        }
    }

    let mut lines = spawn_stdin_reader();
    while !cancel_token.is_cancelled() {
        prompt();
        let line = tokio::select! {
            _ = cancel_token.cancelled() => None,
            line = lines.recv() => line,
        };
        let Some(line) = line else { break };

        let command = ConsoleCommand::parse(&line);
        if command == ConsoleCommand::Quit {
            break;
        }
        let output = tokio::select! {
            _ = cancel_token.cancelled() => break,
            output = execute(&console, command) => output,
        };
        if !output.is_empty() {
            println!("{}", output);
        }
    }

    cancel_token.cancel();
    signals.abort();
    let _ = watcher.await;
    console.shutdown().await;
    println!();
    Ok(())
}
