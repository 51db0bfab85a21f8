// pricesync - Catsy to SparkLayer price synchronization
// Copyright (c) 2025 pricesync Contributors
// Licensed under the MIT License

use clap::Parser;
use pricesync::cli::{Cli, Commands};
use pricesync::config::loader::{apply_env_overrides, read_config_file};
use pricesync::config::SyncConfig;
use pricesync::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings are taken from the config before it is validated, so
    // configuration errors themselves get logged. The command loads the
    // config again with validation.
    let mut bootstrap = read_config_file(&cli.config).unwrap_or_default();
    apply_env_overrides(&mut bootstrap, |key| std::env::var(key).ok());
    if cli.debug {
        bootstrap.application.debug = true;
    }

    let mut logging_config = bootstrap.logging.clone();
    if !cli.command.is_sync() {
        logging_config.local_enabled = false;
    }

    let log_level = log_level(&cli, &bootstrap);
    let logging_guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(1);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "pricesync - Catsy to SparkLayer price sync"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, fatal = true, "Command execution failed");
            eprintln!("Error: {e}");
            1
        }
    };

    // Flush file logs before exiting
    drop(logging_guard);
    process::exit(exit_code);
}

/// `--debug` wins, then `--log-level`, then the configured level
fn log_level(cli: &Cli, config: &SyncConfig) -> String {
    if config.application.debug {
        return "debug".to_string();
    }
    cli.log_level
        .clone()
        .unwrap_or_else(|| config.effective_log_level().to_string())
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Sync(args) => args.execute(&cli.config, cli.debug).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
