//! Herald CLI binary.
//!
//! - `generate` writes the next article
//! - `publish` announces the newest unpublished article on X
//! - `status` and `check-data` inspect local state

use clap::Parser;
use cli::{Cli, Commands, handle_check_data, handle_generate, handle_publish, handle_status};
use herald::HeraldResult;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Credentials may come from a local .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    #[cfg(feature = "observability")]
    let telemetry = herald::init_telemetry(cli.verbose).map_err(|e| e.to_string());
    #[cfg(not(feature = "observability"))]
    let telemetry = herald::init_tracing(cli.verbose).map_err(|e| e.to_string());
    if let Err(e) = telemetry {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let result = run(cli).await;

    #[cfg(feature = "observability")]
    herald::shutdown_telemetry();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> HeraldResult<()> {
    let coordinator = cli::coordinator(cli.config.as_deref(), cli.topics.as_deref())?;
    match cli.command {
        Commands::Generate { dry_run } => handle_generate(&coordinator, dry_run).await,
        Commands::Publish { dry_run } => handle_publish(&coordinator, dry_run).await,
        Commands::Status => handle_status(&coordinator).await,
        Commands::CheckData => handle_check_data(&coordinator).await,
    }
}
