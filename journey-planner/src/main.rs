use std::process::ExitCode;

use clap::Parser;
use tokio::io::BufReader;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use journey_planner::app::{AppError, Session};
use journey_planner::cli::Cli;
use journey_planner::gateway::HttpGateway;
use journey_planner::planner::PlannerError;
use journey_planner::present::station_list;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    if cli.list_stations {
        print!("{}", station_list());
        return Ok(());
    }

    let config = cli.planner_config()?;
    if config.app_key.is_empty() {
        warn!("no TfL app key configured (set TFL_APP_KEY); requests will likely be rejected");
    }

    let gateway = HttpGateway::new().map_err(PlannerError::from)?;
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    Session::new(&gateway, &config, stdin, stdout)
        .run(&cli.inputs())
        .await?;

    Ok(())
}
