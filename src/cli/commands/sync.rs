//! Sync command implementation
//!
//! Runs one fetch, snapshot, transform and upload cycle.

use super::{EXIT_FAILURE, EXIT_OK};
use crate::config::{load_config, SyncConfig};
use crate::core::sync::{SyncCoordinator, SyncOutcome, SyncSummary};
use crate::log_error_with_context;
use clap::Args;

/// Arguments for the sync command
#[derive(Args, Debug, Default)]
pub struct SyncArgs {
    /// Fetch and transform, but do not upload anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip writing the CSV snapshot
    #[arg(long)]
    pub no_snapshot: bool,
}

impl SyncArgs {
    /// Execute the sync command
    pub async fn execute(&self, config_path: &str, debug: bool) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting sync command");

        let mut config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("{e}");
                return Ok(EXIT_FAILURE);
            }
        };
        self.apply_overrides(&mut config, debug);

        if config.application.dry_run {
            println!("🔍 DRY RUN MODE - nothing will be sent to SparkLayer");
            println!();
        }

        let coordinator = match SyncCoordinator::new(&config) {
            Ok(coordinator) => coordinator,
            Err(e) => {
                log_error_with_context!(&e, "Failed to initialize sync");
                eprintln!("Failed to initialize sync: {e}");
                return Ok(EXIT_FAILURE);
            }
        };

        let summary = match coordinator.run().await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!(error = %e, fatal = true, "Sync aborted");
                eprintln!("Sync aborted: {e}");
                return Ok(EXIT_FAILURE);
            }
        };

        summary.log();
        print_summary(&summary);
        Ok(EXIT_OK)
    }

    /// Fold command-line flags into the loaded configuration
    pub fn apply_overrides(&self, config: &mut SyncConfig, debug: bool) {
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }
        if self.no_snapshot {
            config.snapshot.enabled = false;
        }
        if debug {
            config.application.debug = true;
        }
    }
}

fn print_summary(summary: &SyncSummary) {
    println!();
    println!("📊 Sync Summary:");
    println!("  Records Fetched: {}", summary.records_fetched);
    println!("  Items Prepared: {}", summary.items_prepared);
    println!("  Records Skipped: {}", summary.records_skipped);
    println!(
        "  Batches: {} sent, {} succeeded, {} failed",
        summary.upload.batches_attempted,
        summary.upload.batches_succeeded,
        summary.upload.batches_failed
    );
    println!("  Items Uploaded: {}", summary.upload.items_uploaded);
    if let Some(path) = &summary.snapshot_path {
        println!("  Snapshot: {}", path.display());
    }
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();

    match summary.outcome {
        SyncOutcome::NothingToSync => println!("ℹ️  No products received, nothing to sync"),
        SyncOutcome::NoValidItems => println!("ℹ️  No valid products to upload"),
        SyncOutcome::DryRun => println!("✅ Dry run complete"),
        SyncOutcome::Uploaded if summary.is_clean() => println!("✅ Sync completed successfully!"),
        SyncOutcome::Uploaded => println!("⚠️  Sync completed with failures"),
    }
}
