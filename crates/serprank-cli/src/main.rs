mod collect;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "serprank")]
#[command(about = "Track a domain's Google organic rank for a fixed keyword set")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Query every tracked keyword and append the results to the rank history.
    Collect {
        /// Tracking config path (overrides `SERPRANK_CONFIG_PATH`).
        #[arg(long)]
        config: Option<PathBuf>,
        /// History file path (overrides `SERPRANK_DATA_FILE`).
        #[arg(long)]
        data_file: Option<PathBuf>,
        /// Print the planned queries without calling the API or writing files.
        #[arg(long)]
        dry_run: bool,
    },
    /// Load and validate the tracking config, then exit.
    ValidateConfig {
        #[arg(
            long,
            env = "SERPRANK_CONFIG_PATH",
            default_value = "./config/tracking.yaml"
        )]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logging starts before the app config loads so config errors get logged.
    let log_level = std::env::var("SERPRANK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Collect {
            config,
            data_file,
            dry_run,
        } => collect::run_collect(config, data_file, dry_run).await,
        Commands::ValidateConfig { config } => collect::run_validate_config(&config),
    }
}
