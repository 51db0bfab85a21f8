//! Sync coordinator - runs the fetch, snapshot, transform and upload stages

use super::summary::{SyncOutcome, SyncSummary};
use crate::adapters::{CatalogSource, CatsyClient, PricingTarget, SparkLayerClient};
use crate::config::SyncConfig;
use crate::core::fetch::Paginator;
use crate::core::snapshot::write_snapshot;
use crate::core::transform::transform;
use crate::core::upload::{batch_count, Uploader};
use crate::domain::{Result, SourceRecord};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Sync coordinator
pub struct SyncCoordinator<'a> {
    config: &'a SyncConfig,
    source: Box<dyn CatalogSource>,
    target: Box<dyn PricingTarget>,
}

impl<'a> SyncCoordinator<'a> {
    /// Create a coordinator talking to Catsy and SparkLayer
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either client cannot be built.
    pub fn new(config: &'a SyncConfig) -> Result<Self> {
        let debug = config.application.debug;
        let source = CatsyClient::new(&config.catsy, debug)?;
        let target = SparkLayerClient::new(&config.sparklayer)?;
        Ok(Self::with_adapters(config, Box::new(source), Box::new(target)))
    }

    /// Create a coordinator over arbitrary adapters
    pub fn with_adapters(
        config: &'a SyncConfig,
        source: Box<dyn CatalogSource>,
        target: Box<dyn PricingTarget>,
    ) -> Self {
        Self {
            config,
            source,
            target,
        }
    }

    /// Run one sync
    ///
    /// 1. Fetch every catalog record
    /// 2. Write the CSV snapshot (if enabled)
    /// 3. Transform records into pricing items
    /// 4. Upload the items in batches, unless this is a dry run
    ///
    /// # Errors
    ///
    /// Only a refused access token ends the run with an error. Failed pages,
    /// dropped records, failed batches and snapshot problems are logged and
    /// reflected in the returned summary.
    pub async fn run(&self) -> Result<SyncSummary> {
        let start_time = Instant::now();
        let debug = self.config.application.debug;

        tracing::info!(dry_run = self.config.application.dry_run, "Starting price sync");

        let fetched = Paginator::from_config(&self.config.catsy, debug)
            .fetch_all(self.source.as_ref())
            .await;
        tracing::info!(
            records = fetched.records.len(),
            pages = fetched.pages,
            complete = fetched.complete,
            "Catalog fetch finished"
        );

        if fetched.records.is_empty() {
            tracing::warn!("No products received from Catsy, nothing to sync");
            let mut summary = SyncSummary::new(SyncOutcome::NothingToSync);
            summary.fetch_complete = fetched.complete;
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        let snapshot_path = self.snapshot(&fetched.records);

        let transformed = transform(&fetched.records);
        tracing::info!(
            items = transformed.items.len(),
            skipped = transformed.skipped,
            "Prepared pricing items"
        );

        let mut summary = SyncSummary::new(SyncOutcome::Uploaded);
        summary.records_fetched = fetched.records.len();
        summary.fetch_complete = fetched.complete;
        summary.items_prepared = transformed.items.len();
        summary.records_skipped = transformed.skipped;
        summary.snapshot_path = snapshot_path;

        if transformed.items.is_empty() {
            tracing::warn!("No valid products to upload");
            summary.outcome = SyncOutcome::NoValidItems;
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        if self.config.application.dry_run {
            tracing::info!(
                items = transformed.items.len(),
                batches = batch_count(transformed.items.len(), self.config.sparklayer.batch_size),
                "Dry run: skipping upload"
            );
            summary.outcome = SyncOutcome::DryRun;
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        summary.upload = Uploader::from_config(&self.config.sparklayer, debug)
            .upload(self.target.as_ref(), &transformed.items)
            .await?;

        Ok(summary.with_duration(start_time.elapsed()))
    }

    fn snapshot(&self, records: &[SourceRecord]) -> Option<PathBuf> {
        if !self.config.snapshot.enabled {
            return None;
        }

        let timestamp = chrono::Local::now().naive_local();
        match write_snapshot(records, Path::new(&self.config.snapshot.directory), timestamp) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to write snapshot, continuing");
                None
            }
        }
    }
}
