//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for pricesync using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// pricesync - Catsy to SparkLayer price synchronization
#[derive(Parser, Debug)]
#[command(name = "pricesync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "pricesync.toml", env = "PRICESYNC_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Verbose diagnostics (forces debug logging)
    #[arg(short, long, env = "PRICESYNC_DEBUG")]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch prices from Catsy and push them to SparkLayer
    Sync(commands::sync::SyncArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Commands {
    /// True for commands that talk to the remote APIs
    pub fn is_sync(&self) -> bool {
        matches!(self, Commands::Sync(_))
    }
}
