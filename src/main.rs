use clap::Parser;
use logpilot::api::HttpGateway;
use logpilot::cli::{
    alerts, ask, console, handle_completions, handle_config_init, health, history,
    load_config_with_overrides, metrics, AlertsCommands, Cli, Commands, ConfigCommands,
};
use logpilot::logging::init_tracing;

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Commands that never talk to the backend
    match &cli.command {
        Commands::Config(ConfigCommands::Init(args)) => {
            println!("{}", handle_config_init(args)?);
            return Ok(());
        }
        Commands::Completions(args) => {
            handle_completions(args);
            return Ok(());
        }
        _ => {}
    }

    let config = load_config_with_overrides(&cli)?;
    init_tracing(&config.logging)?;
    tracing::debug!(?config, "Loaded configuration");

    if let Commands::Console = cli.command {
        return console::run_console(&config).await;
    }

    let gateway = HttpGateway::new(&config.api)?;
    let output = match &cli.command {
        Commands::Ask(args) => ask::handle_ask(args, &gateway).await?,
        Commands::Health(args) => health::handle_health(args, &gateway).await?,
        Commands::History(args) => history::handle_history(args, &gateway).await?,
        Commands::Metrics(args) => metrics::handle_metrics(args, &gateway).await?,
        Commands::Alerts(AlertsCommands::List(args)) => {
            alerts::handle_alerts_list(args, &gateway).await?
        }
        Commands::Alerts(AlertsCommands::Dismiss(args)) => {
            alerts::handle_alerts_dismiss(args, &gateway).await?
        }
        Commands::Console | Commands::Config(_) | Commands::Completions(_) => String::new(),
    };
    println!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
