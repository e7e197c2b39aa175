//! CLI module for LogPilot
//!
//! Command-line interface definitions and handlers for the LogPilot console.
//!
//! # Commands
//!
//! - `console` - Interactive terminal console
//! - `ask` - Submit one query and print the answer
//! - `health` - Show backend and model readiness
//! - `history` - Show the stored conversation
//! - `metrics` - Show evaluation metrics
//! - `alerts` - List or dismiss active alerts
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Talk to a backend on another host
//! logpilot --api-url http://pilot.internal:8000 console
//!
//! # One-shot query
//! logpilot ask "how many errors did payments log in the last hour?"
//!
//! # Generate shell completions
//! logpilot completions bash > ~/.bash_completion.d/logpilot
//! ```

pub mod alerts;
pub mod ask;
pub mod completions;
pub mod config;
pub mod console;
pub mod health;
pub mod history;
pub mod metrics;
pub mod output;

pub use completions::handle_completions;
pub use config::handle_config_init;

use crate::config::ConsoleConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// LogPilot - natural-language log analysis console
#[derive(Parser, Debug)]
#[command(
    name = "logpilot",
    version,
    about = "Terminal console for the LogPilot log analysis backend"
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "logpilot.toml")]
    pub config: PathBuf,

    /// Override backend base URL
    #[arg(long, global = true, env = "LOGPILOT_API_URL")]
    pub api_url: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = "LOGPILOT_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive console
    Console,
    /// Submit a single query
    Ask(AskArgs),
    /// Show backend readiness
    Health(OutputArgs),
    /// Show conversation history
    History(OutputArgs),
    /// Show evaluation metrics
    Metrics(OutputArgs),
    /// Inspect and dismiss alerts
    #[command(subcommand)]
    Alerts(AlertsCommands),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// Natural-language question about the logs
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskArgs {
    /// The query words joined back into one string.
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum AlertsCommands {
    /// List active alerts
    List(OutputArgs),
    /// Mark an alert as read
    Dismiss(DismissArgs),
}

#[derive(Args, Debug)]
pub struct DismissArgs {
    /// Alert ID
    pub id: String,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "logpilot.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Load configuration with CLI overrides
///
/// A missing config file is not an error; defaults are used instead.
pub fn load_config_with_overrides(
    cli: &Cli,
) -> Result<ConsoleConfig, Box<dyn std::error::Error>> {
    let mut config = if cli.config.exists() {
        ConsoleConfig::load(Some(&cli.config))?
    } else {
        ConsoleConfig::default()
    };

    config = config.with_env_overrides();

    if let Some(ref url) = cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    config.validate()?;
    Ok(config)
}
