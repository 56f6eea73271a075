use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::Instrument;

use codevigil::cli::commands::{
    show_getting_started, AddCommand, Command, ConfigCommand, DashboardCommand, ReposCommand,
};
use codevigil::cli::{Cli, Commands};
use codevigil::config::CodeVigilConfig;
use codevigil::observability::api_stats;
use codevigil::telemetry::{create_command_span, generate_correlation_id, init_telemetry};

fn main() -> Result<ExitCode> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = CodeVigilConfig::load()?;
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }
    if cli.json_logs {
        config.observability.json_logs = true;
    }
    init_telemetry(&config.observability)?;

    let Some(command) = cli.command else {
        return Ok(show_getting_started());
    };

    let name = command_name(&command);
    let span = create_command_span(name, &generate_correlation_id());

    let exit = tokio::runtime::Runtime::new()?
        .block_on(run(command, &config).instrument(span))?;

    api_stats().log_stats();
    Ok(exit)
}

async fn run(command: Commands, config: &CodeVigilConfig) -> Result<ExitCode> {
    match command {
        Commands::Repos { json } => ReposCommand::new(json).execute(config).await,
        Commands::Dashboard {
            repo,
            aggregation,
            json,
            watch,
            interval,
        } => {
            DashboardCommand::new(repo, aggregation, json)
                .with_watch(watch, interval)
                .execute(config)
                .await
        }
        Commands::Add { repo_url } => AddCommand::new(repo_url).execute(config).await,
        Commands::Config { init, force } => ConfigCommand::new(init, force).execute(config).await,
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Repos { .. } => "repos",
        Commands::Dashboard { .. } => "dashboard",
        Commands::Add { .. } => "add",
        Commands::Config { .. } => "config",
    }
}
